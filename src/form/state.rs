use serde::{Deserialize, Serialize};

use crate::activity::ActivityInputs;
use crate::ai::AiUsage;
use crate::devices::DeviceLedger;
use crate::factors::Role;
use crate::results::{Archetype, CategoryTotals};

/// The questionnaire pages, in forward order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Page {
    Intro,
    Main,
    Guess,
    Results,
    Virtues,
}

impl Default for Page {
    fn default() -> Self {
        Page::Intro
    }
}

/// All session-scoped form state. Owned by exactly one session, mutated only
/// through command dispatch, and reset wholesale on restart.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    pub page: Page,
    pub role: Option<Role>,
    pub name: String,
    pub devices: DeviceLedger,
    pub activity: ActivityInputs,
    pub ai: AiUsage,
    pub archetype_guess: Option<Archetype>,
    /// Category totals snapshotted when the user leaves data collection.
    /// Recomputing requires going back to `Main` and submitting again.
    pub results: Option<CategoryTotals>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Category totals computed live from the currently staged inputs.
    /// `None` until a role is chosen, since activity factors are role-keyed.
    pub fn live_totals(&self) -> Option<CategoryTotals> {
        let role = self.role?;
        let ledger = self.devices.totals();
        Some(CategoryTotals {
            devices: ledger.production_kg,
            e_waste: ledger.end_of_life_kg,
            digital_activities: self.activity.annual_total_kg(role),
            ai_tools: self.ai.annual_total_kg(),
        })
    }

    /// Full reset back to the freshly-initialized defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
