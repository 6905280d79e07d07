use log::warn;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::factors::{DeviceType, DisposalMethod};

pub const MIN_LIFESPAN_YEARS: f64 = 0.5;
pub const MAX_LIFESPAN_YEARS: f64 = 20.0;

/// Stable identifier for one ledger entry. Devices of the same type are told
/// apart by id, not by their display ordinal.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
pub struct DeviceId(Uuid);

impl DeviceId {
    fn new() -> Self {
        DeviceId(Uuid::new_v4())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Ownership {
    Unset,
    Personal,
    Shared,
}

impl Default for Ownership {
    fn default() -> Self {
        Ownership::Unset
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Condition {
    Unset,
    New,
    Used,
}

impl Default for Condition {
    fn default() -> Self {
        Condition::Unset
    }
}

/// The editable attributes of a device. These are staged values: totals read
/// them live while the user edits, confirmation only flips the device flag.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeviceFields {
    pub lifespan_years: f64,
    pub ownership: Ownership,
    pub condition: Condition,
    pub disposal: Option<DisposalMethod>,
}

impl Default for DeviceFields {
    fn default() -> Self {
        Self {
            lifespan_years: 1.0,
            ownership: Ownership::Unset,
            condition: Condition::Unset,
            disposal: None,
        }
    }
}

impl DeviceFields {
    pub fn all_selects_set(&self) -> bool {
        self.ownership != Ownership::Unset
            && self.condition != Condition::Unset
            && self.disposal.is_some()
    }

    /// Declared lifespan scaled by the sharing/condition multiplier table:
    ///
    /// | condition | ownership | multiplier |
    /// |-----------|-----------|------------|
    /// | New       | Personal  | 1          |
    /// | Used      | Personal  | 1.5        |
    /// | New       | Shared    | 3          |
    /// | Used      | Shared    | 4.5        |
    ///
    /// Any combination still unset falls back to the declared years.
    pub fn effective_lifespan_years(&self) -> f64 {
        let multiplier = match (self.condition, self.ownership) {
            (Condition::New, Ownership::Personal) => 1.0,
            (Condition::Used, Ownership::Personal) => 1.5,
            (Condition::New, Ownership::Shared) => 3.0,
            (Condition::Used, Ownership::Shared) => 4.5,
            _ => 1.0,
        };
        self.lifespan_years * multiplier
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub id: DeviceId,
    pub kind: DeviceType,
    /// 0-based position among devices of the same type at the time of adding,
    /// used only to disambiguate labels.
    pub ordinal: u32,
    pub fields: DeviceFields,
    pub confirmed: bool,
}

impl Device {
    fn new(kind: DeviceType, ordinal: u32) -> Self {
        Self {
            id: DeviceId::new(),
            kind,
            ordinal,
            fields: DeviceFields::default(),
            confirmed: false,
        }
    }

    pub fn label(&self) -> String {
        if self.ordinal == 0 {
            self.kind.label().to_string()
        } else {
            format!("{} #{}", self.kind.label(), self.ordinal + 1)
        }
    }

    /// Annual share of embodied production emissions, kg CO2e.
    pub fn annual_production_kg(&self) -> f64 {
        let lifespan = self.fields.effective_lifespan_years();
        if lifespan == 0.0 {
            return 0.0;
        }
        self.kind.production_kg() / lifespan
    }

    /// Annual share of end-of-life emissions, kg CO2e. Negative when the
    /// disposal method avoids emissions; zero while no method is chosen.
    pub fn annual_disposal_kg(&self) -> f64 {
        let lifespan = self.fields.effective_lifespan_years();
        if lifespan == 0.0 {
            return 0.0;
        }
        let modifier = self.fields.disposal.map_or(0.0, |d| d.modifier());
        self.kind.production_kg() * modifier / lifespan
    }
}

/// Live production and end-of-life totals over the whole ledger.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LedgerTotals {
    pub production_kg: f64,
    pub end_of_life_kg: f64,
}

/// The user's declared devices. Owns every `Device`; nothing else mutates
/// them. Newest entries sit at the front, matching the entry order the user
/// sees.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeviceLedger {
    devices: Vec<Device>,
}

impl DeviceLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Device> {
        self.devices.iter()
    }

    pub fn get(&self, id: DeviceId) -> Option<&Device> {
        self.devices.iter().find(|d| d.id == id)
    }

    fn get_mut(&mut self, id: DeviceId) -> Option<&mut Device> {
        self.devices.iter_mut().find(|d| d.id == id)
    }

    /// Adds a new, unconfirmed device and returns its id. The ordinal is the
    /// number of same-type devices already in the ledger.
    pub fn add(&mut self, kind: DeviceType) -> DeviceId {
        let ordinal = self.devices.iter().filter(|d| d.kind == kind).count() as u32;
        let device = Device::new(kind, ordinal);
        let id = device.id;
        self.devices.insert(0, device);
        id
    }

    pub fn set_lifespan(&mut self, id: DeviceId, years: f64) -> bool {
        match self.get_mut(id) {
            Some(device) => {
                device.fields.lifespan_years =
                    years.clamp(MIN_LIFESPAN_YEARS, MAX_LIFESPAN_YEARS);
                true
            }
            None => false,
        }
    }

    pub fn set_ownership(&mut self, id: DeviceId, ownership: Ownership) -> bool {
        match self.get_mut(id) {
            Some(device) => {
                device.fields.ownership = ownership;
                true
            }
            None => false,
        }
    }

    pub fn set_condition(&mut self, id: DeviceId, condition: Condition) -> bool {
        match self.get_mut(id) {
            Some(device) => {
                device.fields.condition = condition;
                true
            }
            None => false,
        }
    }

    pub fn set_disposal(&mut self, id: DeviceId, disposal: DisposalMethod) -> bool {
        match self.get_mut(id) {
            Some(device) => {
                device.fields.disposal = Some(disposal);
                true
            }
            None => false,
        }
    }

    /// Marks the device confirmed. Returns `Ok(false)` (and leaves the device
    /// open) if any of the three selects is still unset; `Err(())` signals an
    /// unknown id.
    pub fn confirm(&mut self, id: DeviceId) -> Result<bool, ()> {
        let device = self.get_mut(id).ok_or(())?;
        if !device.fields.all_selects_set() {
            warn!("confirm rejected for {}: fields incomplete", device.label());
            return Ok(false);
        }
        device.confirmed = true;
        Ok(true)
    }

    /// Removes the device and all its state. Returns false on unknown id.
    pub fn remove(&mut self, id: DeviceId) -> bool {
        let before = self.devices.len();
        self.devices.retain(|d| d.id != id);
        self.devices.len() != before
    }

    pub fn unconfirmed_count(&self) -> usize {
        self.devices.iter().filter(|d| !d.confirmed).count()
    }

    pub fn all_confirmed(&self) -> bool {
        self.unconfirmed_count() == 0
    }

    /// Sums annual shares over currently staged values, confirmed or not, so
    /// the host can preview totals while the user is still editing.
    pub fn totals(&self) -> LedgerTotals {
        let mut totals = LedgerTotals::default();
        for device in &self.devices {
            totals.production_kg += device.annual_production_kg();
            totals.end_of_life_kg += device.annual_disposal_kg();
        }
        totals
    }
}
