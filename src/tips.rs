use std::collections::BTreeSet;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::devices::Condition;
use crate::factors::{CloudBucket, EmailVolume, IdleHabit};
use crate::form::FormState;
use crate::results::Category;

/// Total queries per day at or below which AI usage counts as sparing.
pub const LIGHT_AI_QUERIES_PER_DAY: u32 = 20;

const LONG_LIVED_YEARS: f64 = 5.0;
const MAX_EXTRA_TIP_CATEGORIES: usize = 3;

/// Reduction tips per category, in display order.
pub fn tips_for(category: Category) -> &'static [&'static str] {
    match category {
        Category::Devices => &[
            "Turn off devices when not in use – Even in standby mode, they consume energy. Powering them off saves electricity and extends their lifespan.",
            "Update software regularly – This enhances efficiency and performance, often reducing energy consumption.",
            "Activate power-saving settings, reduce screen brightness and enable dark mode – This lowers energy use.",
            "Choose accessories made from recycled or sustainable materials – This minimizes the environmental impact of your tech choices.",
        ],
        Category::EWaste => &[
            "Avoid upgrading devices every year – Extending device lifespan significantly reduces environmental impact.",
            "Repair instead of replacing – Fix broken electronics whenever possible to avoid unnecessary waste.",
            "Consider buying refurbished devices – They’re often as good as new, but with a much lower environmental footprint.",
            "Recycle unused electronics properly – Don’t store old devices at home or dispose of them in the environment! E-waste contains polluting and valuable materials that need specialized treatment.",
        ],
        Category::DigitalActivities => &[
            "Use your internet mindfully – Close unused apps, avoid sending large attachments, and turn off video during calls when not essential.",
            "Declutter your digital space – Regularly delete unnecessary files, empty trash and spam folders, and clean up cloud storage to reduce digital pollution.",
            "Share links instead of attachments – For example, link to a document on OneDrive or Google Drive instead of attaching it in an email.",
            "Use instant messaging for short, urgent messages – It's more efficient than email for quick communications.",
        ],
        Category::AiTools => &[
            "Use search engines for simple tasks – They consume far less energy than AI tools.",
            "Disable AI-generated results in search engines – (e.g., on Bing: go to Settings > Search > Uncheck \"Include AI-powered answers\" or similar option)",
            "Prefer smaller AI models when possible – For basic tasks, use lighter versions like GPT-4o-mini instead of more energy-intensive models.",
            "Be concise in AI prompts and require concise answers – Short inputs and outputs require less processing.",
        ],
    }
}

/// The dominant category's full tip list plus a random bonus tip from up to
/// three of the remaining categories. The sampling is presentation variety
/// only, so any `Rng` will do; tests pass a seeded one.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TipSelection {
    pub primary_category: Category,
    pub primary: Vec<&'static str>,
    pub extra: Vec<&'static str>,
}

pub fn select_tips<R: Rng>(dominant: Category, rng: &mut R) -> TipSelection {
    let others: Vec<Category> = Category::ALL
        .into_iter()
        .filter(|c| *c != dominant)
        .collect();
    let extra = others
        .choose_multiple(rng, MAX_EXTRA_TIP_CATEGORIES)
        .filter_map(|category| tips_for(*category).choose(rng).copied())
        .collect();

    TipSelection {
        primary_category: dominant,
        primary: tips_for(dominant).to_vec(),
        extra,
    }
}

/// Scans the collected answers for positive habits and returns one affirmation
/// per detected habit. Every detected virtue is surfaced; capping the list is
/// left to the host.
pub fn detect_virtues(state: &FormState) -> Vec<String> {
    let mut virtues = Vec::new();

    let used_devices: BTreeSet<&str> = state
        .devices
        .iter()
        .filter(|d| d.fields.condition == Condition::Used)
        .map(|d| d.kind.label())
        .collect();
    if !used_devices.is_empty() {
        let names = used_devices.into_iter().collect::<Vec<_>>().join(", ");
        virtues.push(format!(
            "You chose a used device for your {names}! This typically reduces \
             manufacturing emissions by 30–50% per device."
        ));
    }

    let long_lived: BTreeSet<&str> = state
        .devices
        .iter()
        .filter(|d| d.fields.lifespan_years > LONG_LIVED_YEARS)
        .map(|d| d.kind.label())
        .collect();
    if !long_lived.is_empty() {
        let names = long_lived.into_iter().collect::<Vec<_>>().join(", ");
        virtues.push(format!(
            "You use your {names} for more than 5 years! Extending device life \
             reduces the need for new production and saves valuable resources."
        ));
    }

    let has_favorable_disposal = state
        .devices
        .iter()
        .any(|d| d.fields.disposal.is_some_and(|m| m.is_favorable()));
    if has_favorable_disposal {
        virtues.push(
            "You dispose of devices responsibly! EU aims to achieve a correct e-waste \
             disposal rate of 65%, but many countries are still below this threshold."
                .to_string(),
        );
    }

    if state.activity.email_attachments == EmailVolume::OneToTen {
        virtues.push(
            "You keep the exchange of emails with attachments low. An email with an \
             attachment typically weighs almost ten times more than one without."
                .to_string(),
        );
    }

    if matches!(
        state.activity.cloud,
        CloudBucket::UnderFiveGb | CloudBucket::FiveToTwentyGb
    ) {
        virtues.push(
            "You keep your cloud storage light by cleaning up files you no longer need! \
             This reduces the energy required to store and maintain them."
                .to_string(),
        );
    }

    if state.activity.idle == IdleHabit::TurnOff {
        virtues.push(
            "You turn off your computer when not in use. This single action can save \
             over 150 kWh of energy per year for a single computer!"
                .to_string(),
        );
    }

    if state.activity.pages_per_day == 0 {
        virtues.push(
            "You never print. This saves paper, ink, and the energy needed for \
             printing... the trees thank you!"
                .to_string(),
        );
    }

    if state.ai.total_queries_per_day() <= LIGHT_AI_QUERIES_PER_DAY {
        virtues.push(
            "You use AI sparingly, staying under 20 queries a day. This reduces the \
             energy consumed by high-compute AI models."
                .to_string(),
        );
    }

    virtues
}
