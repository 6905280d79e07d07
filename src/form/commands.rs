use std::fmt;

use serde::{Deserialize, Serialize};

use crate::devices::{Condition, DeviceId, Ownership};
use crate::factors::{
    Activity, AiTask, CloudBucket, DeviceType, DisposalMethod, EmailVolume, IdleHabit, Role,
};
use crate::results::Archetype;

/// One user interaction, as dispatched by the host UI. Every widget change or
/// button press maps to exactly one command applied to the form state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Command {
    SetRole { role: Role },
    SetName { name: String },
    /// `None` models the picker still sitting on its unset sentinel.
    AddDevice { kind: Option<DeviceType> },
    SetDeviceLifespan { id: DeviceId, years: f64 },
    SetDeviceOwnership { id: DeviceId, ownership: Ownership },
    SetDeviceCondition { id: DeviceId, condition: Condition },
    SetDeviceDisposal { id: DeviceId, disposal: DisposalMethod },
    ConfirmDevice { id: DeviceId },
    RemoveDevice { id: DeviceId },
    SetActivityHours { activity: Activity, hours: f64 },
    SetEmailPlain { volume: EmailVolume },
    SetEmailAttachments { volume: EmailVolume },
    SetCloudStorage { bucket: CloudBucket },
    SetWifiHours { hours: f64 },
    SetPrintedPages { pages: u32 },
    SetIdleHabit { habit: IdleHabit },
    SetAiQueries { task: AiTask, per_day: u32 },
    ChooseArchetype { archetype: Archetype },
    Next,
    Back,
    /// Virtues page only: jump back to data collection keeping all answers.
    EditAnswers,
    /// Virtues page only: wipe the whole session and return to the intro.
    Restart,
}

/// Recoverable validation problems. Surfaced to the user, never stored; the
/// page does not advance and no entered data is lost.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Warning {
    MissingNameOrRole,
    SelectDeviceBeforeAdding,
    IncompleteDeviceFields,
    UnconfirmedDevices,
    MissingConnectivitySelections,
    MissingArchetypeGuess,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Warning::MissingNameOrRole => {
                "Please enter your name and select your role before continuing."
            }
            Warning::SelectDeviceBeforeAdding => "Please select a valid device before adding.",
            Warning::IncompleteDeviceFields => "Please complete all fields before confirming.",
            Warning::UnconfirmedDevices => {
                "You have devices not yet confirmed. Please confirm each one to proceed."
            }
            Warning::MissingConnectivitySelections => {
                "Please complete all digital activity fields before continuing."
            }
            Warning::MissingArchetypeGuess => "Please choose an archetype before continuing.",
        };
        f.write_str(message)
    }
}

/// What a single dispatch produced. An empty warning list means the command
/// took full effect.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Outcome {
    pub warnings: Vec<Warning>,
    /// Set when the command created a new device, so the host can focus it.
    pub added_device: Option<DeviceId>,
}

impl Outcome {
    pub fn ok() -> Self {
        Self::default()
    }

    pub fn warn(warning: Warning) -> Self {
        Self {
            warnings: vec![warning],
            added_device: None,
        }
    }
}
