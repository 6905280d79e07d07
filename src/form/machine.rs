use anyhow::{anyhow, Result};
use log::{info, warn};

use super::commands::{Command, Outcome, Warning};
use super::state::{FormState, Page};
use crate::devices::DeviceId;

/// Applies one command to the form state and reports what happened.
///
/// Guard failures come back as warnings in the outcome; the only hard errors
/// are commands referencing a device id the ledger does not know, which is a
/// host bug rather than user input. Commands that do not belong to the
/// current page are ignored with a log line.
pub fn apply(state: &mut FormState, command: Command) -> Result<Outcome> {
    if let Some(required) = required_page(&command) {
        if state.page != required {
            warn!(
                "ignoring {:?} on page {:?} (expected {:?})",
                command, state.page, required
            );
            return Ok(Outcome::ok());
        }
    }

    match command {
        Command::SetRole { role } => {
            state.role = Some(role);
            Ok(Outcome::ok())
        }
        Command::SetName { name } => {
            state.name = name;
            Ok(Outcome::ok())
        }

        Command::AddDevice { kind } => {
            let Some(kind) = kind else {
                return Ok(Outcome::warn(Warning::SelectDeviceBeforeAdding));
            };
            let id = state.devices.add(kind);
            Ok(Outcome {
                warnings: Vec::new(),
                added_device: Some(id),
            })
        }
        Command::SetDeviceLifespan { id, years } => {
            require_device(state.devices.set_lifespan(id, years), id)
        }
        Command::SetDeviceOwnership { id, ownership } => {
            require_device(state.devices.set_ownership(id, ownership), id)
        }
        Command::SetDeviceCondition { id, condition } => {
            require_device(state.devices.set_condition(id, condition), id)
        }
        Command::SetDeviceDisposal { id, disposal } => {
            require_device(state.devices.set_disposal(id, disposal), id)
        }
        Command::ConfirmDevice { id } => match state.devices.confirm(id) {
            Ok(true) => Ok(Outcome::ok()),
            Ok(false) => Ok(Outcome::warn(Warning::IncompleteDeviceFields)),
            Err(()) => Err(unknown_device(id)),
        },
        Command::RemoveDevice { id } => require_device(state.devices.remove(id), id),

        Command::SetActivityHours { activity, hours } => {
            state.activity.set_hours(activity, hours);
            Ok(Outcome::ok())
        }
        Command::SetEmailPlain { volume } => {
            state.activity.email_plain = volume;
            Ok(Outcome::ok())
        }
        Command::SetEmailAttachments { volume } => {
            state.activity.email_attachments = volume;
            Ok(Outcome::ok())
        }
        Command::SetCloudStorage { bucket } => {
            state.activity.cloud = bucket;
            Ok(Outcome::ok())
        }
        Command::SetWifiHours { hours } => {
            state.activity.set_wifi_hours(hours);
            Ok(Outcome::ok())
        }
        Command::SetPrintedPages { pages } => {
            state.activity.set_pages(pages);
            Ok(Outcome::ok())
        }
        Command::SetIdleHabit { habit } => {
            state.activity.idle = habit;
            Ok(Outcome::ok())
        }
        Command::SetAiQueries { task, per_day } => {
            state.ai.set_queries(task, per_day);
            Ok(Outcome::ok())
        }

        Command::ChooseArchetype { archetype } => {
            state.archetype_guess = Some(archetype);
            Ok(Outcome::ok())
        }

        Command::Next => advance(state),
        Command::Back => go_back(state),

        Command::EditAnswers => {
            transition(state, Page::Main);
            Ok(Outcome::ok())
        }
        Command::Restart => {
            info!("session restart: clearing all form state");
            state.reset();
            Ok(Outcome::ok())
        }
    }
}

/// The page a command belongs to; `None` for navigation, which is handled
/// per-page by `advance`/`go_back`.
fn required_page(command: &Command) -> Option<Page> {
    match command {
        Command::SetRole { .. } | Command::SetName { .. } => Some(Page::Intro),
        Command::AddDevice { .. }
        | Command::SetDeviceLifespan { .. }
        | Command::SetDeviceOwnership { .. }
        | Command::SetDeviceCondition { .. }
        | Command::SetDeviceDisposal { .. }
        | Command::ConfirmDevice { .. }
        | Command::RemoveDevice { .. }
        | Command::SetActivityHours { .. }
        | Command::SetEmailPlain { .. }
        | Command::SetEmailAttachments { .. }
        | Command::SetCloudStorage { .. }
        | Command::SetWifiHours { .. }
        | Command::SetPrintedPages { .. }
        | Command::SetIdleHabit { .. }
        | Command::SetAiQueries { .. } => Some(Page::Main),
        Command::ChooseArchetype { .. } => Some(Page::Guess),
        Command::EditAnswers | Command::Restart => Some(Page::Virtues),
        Command::Next | Command::Back => None,
    }
}

/// Forward navigation with the per-page guards.
fn advance(state: &mut FormState) -> Result<Outcome> {
    match state.page {
        Page::Intro => {
            if state.role.is_none() || state.name.trim().is_empty() {
                warn!("intro gate rejected: missing name or role");
                return Ok(Outcome::warn(Warning::MissingNameOrRole));
            }
            transition(state, Page::Main);
            Ok(Outcome::ok())
        }
        Page::Main => {
            let mut warnings = Vec::new();
            if !state.devices.all_confirmed() {
                warnings.push(Warning::UnconfirmedDevices);
            }
            if !state.activity.connectivity_complete() {
                warnings.push(Warning::MissingConnectivitySelections);
            }
            if !warnings.is_empty() {
                warn!(
                    "data-collection gate rejected: {} warning(s)",
                    warnings.len()
                );
                return Ok(Outcome {
                    warnings,
                    added_device: None,
                });
            }
            // The intro gate guarantees a role, so the snapshot always exists
            // here; a missing role means a host bypassed the gates.
            let totals = state
                .live_totals()
                .ok_or_else(|| anyhow!("cannot snapshot totals without a role"))?;
            state.results = Some(totals);
            transition(state, Page::Guess);
            Ok(Outcome::ok())
        }
        Page::Guess => {
            if state.archetype_guess.is_none() {
                warn!("guess gate rejected: no archetype chosen");
                return Ok(Outcome::warn(Warning::MissingArchetypeGuess));
            }
            transition(state, Page::Results);
            Ok(Outcome::ok())
        }
        Page::Results => {
            transition(state, Page::Virtues);
            Ok(Outcome::ok())
        }
        Page::Virtues => {
            warn!("ignoring Next on the final page");
            Ok(Outcome::ok())
        }
    }
}

/// Backward navigation; always unconditional and never discards confirmed
/// data.
fn go_back(state: &mut FormState) -> Result<Outcome> {
    match state.page {
        Page::Intro => {
            warn!("ignoring Back on the intro page");
        }
        Page::Main => transition(state, Page::Intro),
        Page::Guess => transition(state, Page::Main),
        Page::Results => transition(state, Page::Guess),
        Page::Virtues => transition(state, Page::Results),
    }
    Ok(Outcome::ok())
}

fn transition(state: &mut FormState, to: Page) {
    info!("page transition: {:?} -> {:?}", state.page, to);
    state.page = to;
}

fn require_device(found: bool, id: DeviceId) -> Result<Outcome> {
    if found {
        Ok(Outcome::ok())
    } else {
        Err(unknown_device(id))
    }
}

fn unknown_device(id: DeviceId) -> anyhow::Error {
    anyhow!("unknown device id: {id:?}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::devices::{Condition, Ownership};
    use crate::factors::{
        Activity, AiTask, CloudBucket, DeviceType, DisposalMethod, EmailVolume, Role,
    };
    use crate::results::{Archetype, Category};

    fn dispatch(state: &mut FormState, command: Command) -> Outcome {
        apply(state, command).unwrap()
    }

    fn past_intro() -> FormState {
        let mut state = FormState::new();
        dispatch(&mut state, Command::SetRole { role: Role::Student });
        dispatch(&mut state, Command::SetName { name: "Ada".into() });
        dispatch(&mut state, Command::Next);
        assert_eq!(state.page, Page::Main);
        state
    }

    fn add_confirmed_laptop(state: &mut FormState) -> DeviceId {
        let outcome = dispatch(
            state,
            Command::AddDevice {
                kind: Some(DeviceType::LaptopComputer),
            },
        );
        let id = outcome.added_device.unwrap();
        dispatch(state, Command::SetDeviceLifespan { id, years: 2.0 });
        dispatch(
            state,
            Command::SetDeviceCondition {
                id,
                condition: Condition::New,
            },
        );
        dispatch(
            state,
            Command::SetDeviceOwnership {
                id,
                ownership: Ownership::Personal,
            },
        );
        dispatch(
            state,
            Command::SetDeviceDisposal {
                id,
                disposal: DisposalMethod::CollectionCenter,
            },
        );
        let outcome = dispatch(state, Command::ConfirmDevice { id });
        assert!(outcome.warnings.is_empty());
        id
    }

    fn complete_connectivity(state: &mut FormState) {
        dispatch(
            state,
            Command::SetEmailPlain {
                volume: EmailVolume::OneToTen,
            },
        );
        dispatch(
            state,
            Command::SetEmailAttachments {
                volume: EmailVolume::OneToTen,
            },
        );
        dispatch(
            state,
            Command::SetCloudStorage {
                bucket: CloudBucket::UnderFiveGb,
            },
        );
    }

    #[test]
    fn intro_gate_requires_role_and_name() {
        let mut state = FormState::new();
        let outcome = dispatch(&mut state, Command::Next);
        assert_eq!(outcome.warnings, vec![Warning::MissingNameOrRole]);
        assert_eq!(state.page, Page::Intro);

        dispatch(&mut state, Command::SetRole { role: Role::Student });
        dispatch(&mut state, Command::SetName { name: "   ".into() });
        let outcome = dispatch(&mut state, Command::Next);
        assert_eq!(outcome.warnings, vec![Warning::MissingNameOrRole]);

        dispatch(&mut state, Command::SetName { name: "Ada".into() });
        let outcome = dispatch(&mut state, Command::Next);
        assert!(outcome.warnings.is_empty());
        assert_eq!(state.page, Page::Main);
    }

    #[test]
    fn add_device_warns_on_unset_picker() {
        let mut state = past_intro();
        let outcome = dispatch(&mut state, Command::AddDevice { kind: None });
        assert_eq!(outcome.warnings, vec![Warning::SelectDeviceBeforeAdding]);
        assert!(state.devices.is_empty());
    }

    #[test]
    fn main_gate_reports_each_failing_condition() {
        let mut state = past_intro();
        dispatch(
            &mut state,
            Command::AddDevice {
                kind: Some(DeviceType::Smartphone),
            },
        );

        // Unconfirmed device and missing connectivity both warn at once.
        let outcome = dispatch(&mut state, Command::Next);
        assert_eq!(
            outcome.warnings,
            vec![
                Warning::UnconfirmedDevices,
                Warning::MissingConnectivitySelections
            ]
        );
        assert_eq!(state.page, Page::Main);
        assert!(state.results.is_none());

        // Fixing only connectivity still leaves the device gate failing.
        complete_connectivity(&mut state);
        let outcome = dispatch(&mut state, Command::Next);
        assert_eq!(outcome.warnings, vec![Warning::UnconfirmedDevices]);
        assert_eq!(state.page, Page::Main);
    }

    #[test]
    fn main_gate_snapshots_totals_on_success() {
        let mut state = past_intro();
        add_confirmed_laptop(&mut state);
        complete_connectivity(&mut state);
        dispatch(
            &mut state,
            Command::SetActivityHours {
                activity: Activity::WebBrowsing,
                hours: 2.0,
            },
        );

        let outcome = dispatch(&mut state, Command::Next);
        assert!(outcome.warnings.is_empty());
        assert_eq!(state.page, Page::Guess);

        let totals = state.results.unwrap();
        assert!((totals.devices - 85.0).abs() < 1e-9);
        assert!((totals.e_waste - (170.0 * -0.224 / 2.0)).abs() < 1e-9);
        assert!(totals.digital_activities > 13.0);
    }

    #[test]
    fn guess_gate_requires_an_archetype() {
        let mut state = past_intro();
        complete_connectivity(&mut state);
        dispatch(&mut state, Command::Next);
        assert_eq!(state.page, Page::Guess);

        let outcome = dispatch(&mut state, Command::Next);
        assert_eq!(outcome.warnings, vec![Warning::MissingArchetypeGuess]);
        assert_eq!(state.page, Page::Guess);

        dispatch(
            &mut state,
            Command::ChooseArchetype {
                archetype: Archetype::StreamMaster,
            },
        );
        let outcome = dispatch(&mut state, Command::Next);
        assert!(outcome.warnings.is_empty());
        assert_eq!(state.page, Page::Results);
    }

    #[test]
    fn backward_transitions_preserve_data() {
        let mut state = past_intro();
        add_confirmed_laptop(&mut state);
        complete_connectivity(&mut state);
        dispatch(&mut state, Command::Next); // -> Guess
        dispatch(&mut state, Command::Back); // -> Main
        assert_eq!(state.page, Page::Main);
        assert_eq!(state.devices.len(), 1);
        assert!(state.activity.connectivity_complete());

        dispatch(&mut state, Command::Back); // -> Intro
        assert_eq!(state.page, Page::Intro);
        assert_eq!(state.name, "Ada");
    }

    #[test]
    fn edit_answers_returns_to_main_without_losing_state() {
        let mut state = past_intro();
        add_confirmed_laptop(&mut state);
        complete_connectivity(&mut state);
        dispatch(&mut state, Command::Next); // -> Guess
        dispatch(
            &mut state,
            Command::ChooseArchetype {
                archetype: Archetype::GadgetLord,
            },
        );
        dispatch(&mut state, Command::Next); // -> Results
        dispatch(&mut state, Command::Next); // -> Virtues
        assert_eq!(state.page, Page::Virtues);

        dispatch(&mut state, Command::EditAnswers);
        assert_eq!(state.page, Page::Main);
        assert_eq!(state.devices.len(), 1);
        assert!(state.results.is_some());
    }

    #[test]
    fn restart_resets_to_pristine_defaults() {
        let mut state = past_intro();
        add_confirmed_laptop(&mut state);
        complete_connectivity(&mut state);
        dispatch(&mut state, Command::Next);
        dispatch(
            &mut state,
            Command::ChooseArchetype {
                archetype: Archetype::EwasteGuardian,
            },
        );
        dispatch(&mut state, Command::Next);
        dispatch(&mut state, Command::Next);
        assert_eq!(state.page, Page::Virtues);

        dispatch(&mut state, Command::Restart);
        assert_eq!(state, FormState::default());
        assert_eq!(state.page, Page::Intro);
    }

    #[test]
    fn commands_on_the_wrong_page_are_ignored() {
        let mut state = FormState::new();
        // Still on the intro page; device commands do nothing.
        let outcome = dispatch(
            &mut state,
            Command::AddDevice {
                kind: Some(DeviceType::Printer),
            },
        );
        assert!(outcome.warnings.is_empty());
        assert!(outcome.added_device.is_none());
        assert!(state.devices.is_empty());

        let mut state = past_intro();
        dispatch(&mut state, Command::SetRole { role: Role::Professor });
        assert_eq!(state.role, Some(Role::Student));
    }

    #[test]
    fn unknown_device_id_is_a_hard_error() {
        let mut state = past_intro();
        let id = {
            let mut scratch = FormState::new();
            scratch.devices.add(DeviceType::Headphones)
        };
        let result = apply(&mut state, Command::RemoveDevice { id });
        assert!(result.is_err());
    }

    #[test]
    fn removing_an_unconfirmed_device_unblocks_the_gate() {
        let mut state = past_intro();
        complete_connectivity(&mut state);
        let outcome = dispatch(
            &mut state,
            Command::AddDevice {
                kind: Some(DeviceType::Tablet),
            },
        );
        let id = outcome.added_device.unwrap();

        let outcome = dispatch(&mut state, Command::Next);
        assert_eq!(outcome.warnings, vec![Warning::UnconfirmedDevices]);

        dispatch(&mut state, Command::RemoveDevice { id });
        let outcome = dispatch(&mut state, Command::Next);
        assert!(outcome.warnings.is_empty());
        assert_eq!(state.page, Page::Guess);
    }

    #[test]
    fn resubmitting_after_edits_refreshes_the_snapshot() {
        let mut state = past_intro();
        complete_connectivity(&mut state);
        dispatch(&mut state, Command::Next);
        let first = state.results.unwrap();
        assert_eq!(first.dominant(), Category::DigitalActivities);

        dispatch(&mut state, Command::Back);
        dispatch(
            &mut state,
            Command::SetAiQueries {
                task: AiTask::WriteCode,
                per_day: 5000,
            },
        );
        dispatch(&mut state, Command::Next);
        let second = state.results.unwrap();
        assert!(second.ai_tools > first.ai_tools);
        assert_eq!(second.dominant(), Category::AiTools);
    }
}
