mod commands;
mod machine;
mod state;

pub use commands::{Command, Outcome, Warning};
pub use machine::apply;
pub use state::{FormState, Page};
