use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::factors::{AiTask, DAYS};

pub const MAX_QUERIES_PER_DAY: u32 = 10_000;

/// Daily AI query counts per task category.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AiUsage {
    pub queries_per_day: BTreeMap<AiTask, u32>,
}

impl AiUsage {
    pub fn set_queries(&mut self, task: AiTask, per_day: u32) {
        self.queries_per_day
            .insert(task, per_day.min(MAX_QUERIES_PER_DAY));
    }

    /// Annual AI footprint, kg CO2e.
    pub fn annual_total_kg(&self) -> f64 {
        self.queries_per_day
            .iter()
            .map(|(task, count)| *count as f64 * task.per_query_kg())
            .sum::<f64>()
            * DAYS
    }

    /// Total queries across all tasks per day, fed into the light-usage
    /// virtue check.
    pub fn total_queries_per_day(&self) -> u32 {
        self.queries_per_day.values().sum()
    }
}
