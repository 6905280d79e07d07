use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::factors::Role;
use crate::form::FormState;
use crate::tips::{detect_virtues, select_tips, TipSelection};

/// The four emission categories, in the fixed order used everywhere a
/// first-seen rule applies (dominant-category ties included).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Devices,
    EWaste,
    DigitalActivities,
    AiTools,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Devices,
        Category::EWaste,
        Category::DigitalActivities,
        Category::AiTools,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Devices => "Devices",
            Category::EWaste => "E-Waste",
            Category::DigitalActivities => "Digital Activities",
            Category::AiTools => "Artificial Intelligence",
        }
    }
}

/// Snapshot of the four category totals, kg CO2e per year.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTotals {
    pub devices: f64,
    pub e_waste: f64,
    pub digital_activities: f64,
    pub ai_tools: f64,
}

impl CategoryTotals {
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Devices => self.devices,
            Category::EWaste => self.e_waste,
            Category::DigitalActivities => self.digital_activities,
            Category::AiTools => self.ai_tools,
        }
    }

    pub fn entries(&self) -> [(Category, f64); 4] {
        [
            (Category::Devices, self.devices),
            (Category::EWaste, self.e_waste),
            (Category::DigitalActivities, self.digital_activities),
            (Category::AiTools, self.ai_tools),
        ]
    }

    pub fn total(&self) -> f64 {
        self.devices + self.e_waste + self.digital_activities + self.ai_tools
    }

    /// Highest-impact category; on ties the earlier category in the fixed
    /// order wins.
    pub fn dominant(&self) -> Category {
        let mut best = Category::Devices;
        let mut best_value = self.get(best);
        for (category, value) in self.entries() {
            if value > best_value {
                best = category;
                best_value = value;
            }
        }
        best
    }
}

/// Gamification labels, one per category.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Archetype {
    GadgetLord,
    EwasteGuardian,
    StreamMaster,
    PromptPirate,
}

impl Archetype {
    pub const ALL: [Archetype; 4] = [
        Archetype::GadgetLord,
        Archetype::PromptPirate,
        Archetype::EwasteGuardian,
        Archetype::StreamMaster,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Archetype::GadgetLord => "Lord of the Latest Gadgets",
            Archetype::PromptPirate => "Prompt Pirate, Ruler of the Queries",
            Archetype::EwasteGuardian => "Guardian of the Eternal E-Waste Pile",
            Archetype::StreamMaster => "Master of Endless Streams",
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Archetype::GadgetLord => Category::Devices,
            Archetype::PromptPirate => Category::AiTools,
            Archetype::EwasteGuardian => Category::EWaste,
            Archetype::StreamMaster => Category::DigitalActivities,
        }
    }

    pub fn for_category(category: Category) -> Archetype {
        match category {
            Category::Devices => Archetype::GadgetLord,
            Category::AiTools => Archetype::PromptPirate,
            Category::EWaste => Archetype::EwasteGuardian,
            Category::DigitalActivities => Archetype::StreamMaster,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Severity {
    Favorable,
    Neutral,
    Unfavorable,
}

/// Comparison of the user's total against the role's expected average.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AverageComparison {
    pub average_kg: f64,
    pub deviation_pct: f64,
    pub severity: Severity,
    pub message: String,
}

pub fn compare_to_average(role: Role, total_kg: f64) -> Option<AverageComparison> {
    let average_kg = role.average_annual_kg();
    if average_kg <= 0.0 {
        return None;
    }
    let deviation_pct = (total_kg - average_kg) / average_kg * 100.0;
    let abs_pct = deviation_pct.abs();
    let role_label = role.label().to_lowercase();
    let (severity, message) = if abs_pct < 1.0 {
        (
            Severity::Neutral,
            format!("You're roughly in line with the average {role_label}."),
        )
    } else if deviation_pct > 0.0 {
        (
            Severity::Unfavorable,
            format!("You emit ~{abs_pct:.0}% more than the average {role_label}."),
        )
    } else {
        (
            Severity::Favorable,
            format!("You emit ~{abs_pct:.0}% less than the average {role_label}."),
        )
    };
    Some(AverageComparison {
        average_kg,
        deviation_pct,
        severity,
        message,
    })
}

/// Everyday-unit conversions of the total footprint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Equivalents {
    pub burgers: f64,
    pub led_bulb_days: f64,
    pub car_kilometers: f64,
    pub streaming_hours: f64,
}

impl Equivalents {
    pub fn from_total_kg(total_kg: f64) -> Self {
        Self {
            burgers: total_kg / 4.6,
            led_bulb_days: (total_kg / 0.256) / 24.0,
            car_kilometers: total_kg / 0.17,
            streaming_hours: total_kg / 0.055,
        }
    }
}

/// How the pre-results guess resolved. `shown` is the guessed archetype when
/// the guess was correct, otherwise the actual dominant-category archetype.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ArchetypeOutcome {
    pub guessed_correctly: bool,
    pub shown: Archetype,
    pub actual: Archetype,
}

pub fn resolve_archetype(guess: Option<Archetype>, dominant: Category) -> ArchetypeOutcome {
    let actual = Archetype::for_category(dominant);
    match guess {
        Some(guessed) if guessed.category() == dominant => ArchetypeOutcome {
            guessed_correctly: true,
            shown: guessed,
            actual,
        },
        _ => ArchetypeOutcome {
            guessed_correctly: false,
            shown: actual,
            actual,
        },
    }
}

/// Everything the host needs to render the results and tips pages.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResultsSummary {
    pub totals: CategoryTotals,
    pub total_kg: f64,
    pub dominant: Category,
    pub comparison: Option<AverageComparison>,
    pub archetype: ArchetypeOutcome,
    pub equivalents: Equivalents,
    pub tips: TipSelection,
    pub virtues: Vec<String>,
}

/// Assembles the full summary from the totals snapshotted at the end of data
/// collection. Returns `None` until a snapshot exists. The random source only
/// influences which bonus tips appear.
pub fn synthesize<R: Rng>(state: &FormState, rng: &mut R) -> Option<ResultsSummary> {
    let totals = state.results?;
    let role = state.role?;
    let total_kg = totals.total();
    let dominant = totals.dominant();
    Some(ResultsSummary {
        totals,
        total_kg,
        dominant,
        comparison: compare_to_average(role, total_kg),
        archetype: resolve_archetype(state.archetype_guess, dominant),
        equivalents: Equivalents::from_total_kg(total_kg),
        tips: select_tips(dominant, rng),
        virtues: detect_virtues(state),
    })
}
