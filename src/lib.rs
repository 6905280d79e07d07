pub mod activity;
pub mod ai;
pub mod devices;
pub mod factors;
pub mod form;
pub mod results;
pub mod tips;

use chrono::{DateTime, Utc};
use log::info;
use rand::Rng;
use serde::Serialize;
use uuid::Uuid;

use form::{Command, FormState, Outcome};
use results::ResultsSummary;

/// Initialize logging for hosts that have no logger of their own
/// (reads RUST_LOG env var).
pub fn init_logging() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
}

/// One questionnaire run. Each session exclusively owns its form state;
/// concurrent sessions are fully isolated from one another.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: Uuid,
    pub started_at: DateTime<Utc>,
    pub state: FormState,
}

impl Session {
    pub fn new() -> Self {
        let id = Uuid::new_v4();
        info!("session {id} started");
        Self {
            id,
            started_at: Utc::now(),
            state: FormState::new(),
        }
    }

    /// Dispatches one host command into the form state machine.
    pub fn apply(&mut self, command: Command) -> anyhow::Result<Outcome> {
        form::apply(&mut self.state, command)
    }

    /// The full results payload, once data collection has been submitted.
    pub fn summary<R: Rng>(&self, rng: &mut R) -> Option<ResultsSummary> {
        results::synthesize(&self.state, rng)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
