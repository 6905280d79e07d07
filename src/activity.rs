use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::factors::{
    activity_factor, Activity, CloudBucket, EmailVolume, IdleHabit, Role, CLOUD_KG_PER_GB,
    DAYS, EMAIL_ATTACH_KG, EMAIL_PLAIN_KG, IDLE_HOURS_PER_DAY, PRINT_KG_PER_PAGE,
    WIFI_KG_PER_HOUR,
};

pub const MAX_ACTIVITY_HOURS: f64 = 8.0;
pub const MAX_WIFI_HOURS: f64 = 8.0;
pub const MAX_PAGES_PER_DAY: u32 = 100;

/// Daily digital activity and connectivity habits. Hours are per-activity and
/// independently capped; their sum may exceed 8 when the user multitasks,
/// which is accepted rather than rejected.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActivityInputs {
    pub hours_per_day: BTreeMap<Activity, f64>,
    pub email_plain: EmailVolume,
    pub email_attachments: EmailVolume,
    pub cloud: CloudBucket,
    pub wifi_hours_per_day: f64,
    pub pages_per_day: u32,
    pub idle: IdleHabit,
}

impl Default for ActivityInputs {
    fn default() -> Self {
        Self {
            hours_per_day: BTreeMap::new(),
            email_plain: EmailVolume::default(),
            email_attachments: EmailVolume::default(),
            cloud: CloudBucket::default(),
            wifi_hours_per_day: 4.0,
            pages_per_day: 0,
            idle: IdleHabit::default(),
        }
    }
}

impl ActivityInputs {
    /// Stores an hour figure, clamped to 0..=8 and snapped to the half-hour
    /// grid the host presents.
    pub fn set_hours(&mut self, activity: Activity, hours: f64) {
        let clamped = hours.clamp(0.0, MAX_ACTIVITY_HOURS);
        let snapped = (clamped * 2.0).round() / 2.0;
        self.hours_per_day.insert(activity, snapped);
    }

    pub fn set_wifi_hours(&mut self, hours: f64) {
        let clamped = hours.clamp(0.0, MAX_WIFI_HOURS);
        self.wifi_hours_per_day = (clamped * 2.0).round() / 2.0;
    }

    pub fn set_pages(&mut self, pages: u32) {
        self.pages_per_day = pages.min(MAX_PAGES_PER_DAY);
    }

    /// Sum of all reported activity hours, for the host's multitasking note.
    pub fn total_hours_per_day(&self) -> f64 {
        self.hours_per_day.values().sum()
    }

    /// True once the user has explicitly chosen both email buckets and the
    /// cloud bucket. Defaults do not count; the page gate calls this.
    pub fn connectivity_complete(&self) -> bool {
        self.email_plain.is_set() && self.email_attachments.is_set() && self.cloud.is_set()
    }

    fn activities_annual_kg(&self, role: Role) -> f64 {
        self.hours_per_day
            .iter()
            .map(|(activity, hours)| hours * activity_factor(role, *activity))
            .sum::<f64>()
            * DAYS
    }

    fn mail_annual_kg(&self) -> f64 {
        (self.email_plain.midpoint() * EMAIL_PLAIN_KG
            + self.email_attachments.midpoint() * EMAIL_ATTACH_KG
            + self.cloud.midpoint_gb() * CLOUD_KG_PER_GB)
            * DAYS
    }

    fn wifi_annual_kg(&self) -> f64 {
        self.wifi_hours_per_day * WIFI_KG_PER_HOUR * DAYS
    }

    fn print_annual_kg(&self) -> f64 {
        self.pages_per_day as f64 * PRINT_KG_PER_PAGE * DAYS
    }

    fn idle_annual_kg(&self) -> f64 {
        DAYS * IDLE_HOURS_PER_DAY * self.idle.per_hour_kg()
    }

    /// Annual digital-activities footprint for the given role, kg CO2e.
    pub fn annual_total_kg(&self, role: Role) -> f64 {
        self.activities_annual_kg(role)
            + self.mail_annual_kg()
            + self.wifi_annual_kg()
            + self.print_annual_kg()
            + self.idle_annual_kg()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn quiet_baseline() -> ActivityInputs {
        // Everything zeroed so single contributions can be read off directly.
        let mut inputs = ActivityInputs::default();
        inputs.wifi_hours_per_day = 0.0;
        inputs.idle = IdleHabit::NoComputer;
        inputs
    }

    #[test]
    fn student_web_browsing_example() {
        let mut inputs = quiet_baseline();
        inputs.set_hours(Activity::WebBrowsing, 2.0);
        assert!(close(inputs.annual_total_kg(Role::Student), 13.2));
    }

    #[test]
    fn mail_uses_bucket_midpoints() {
        let mut inputs = quiet_baseline();
        inputs.email_plain = EmailVolume::OneToTen;
        inputs.email_attachments = EmailVolume::ElevenToTwenty;
        inputs.cloud = CloudBucket::TwentyToFiftyGb;
        let expected = (5.0 * 0.004 + 15.0 * 0.035 + 35.0 * 0.01) * 250.0;
        assert!(close(inputs.annual_total_kg(Role::Professor), expected));
    }

    #[test]
    fn idle_habit_contributions() {
        let mut inputs = quiet_baseline();
        inputs.idle = IdleHabit::LeaveOn;
        assert!(close(inputs.annual_total_kg(Role::Student), 250.0 * 16.0 * 0.0104));
        inputs.idle = IdleHabit::TurnOff;
        assert!(close(
            inputs.annual_total_kg(Role::Student),
            250.0 * 16.0 * 0.0005204
        ));
        inputs.idle = IdleHabit::NoComputer;
        assert_eq!(inputs.annual_total_kg(Role::Student), 0.0);
    }

    #[test]
    fn wifi_and_print_contributions() {
        let mut inputs = quiet_baseline();
        inputs.set_wifi_hours(4.0);
        inputs.set_pages(10);
        let expected = 4.0 * 0.00584 * 250.0 + 10.0 * 0.0045 * 250.0;
        assert!(close(inputs.annual_total_kg(Role::StaffMember), expected));
    }

    #[test]
    fn hours_snap_to_half_hour_grid_and_clamp() {
        let mut inputs = ActivityInputs::default();
        inputs.set_hours(Activity::WebBrowsing, 1.3);
        assert_eq!(inputs.hours_per_day[&Activity::WebBrowsing], 1.5);
        inputs.set_hours(Activity::WebBrowsing, 12.0);
        assert_eq!(inputs.hours_per_day[&Activity::WebBrowsing], 8.0);
        inputs.set_hours(Activity::WebBrowsing, -3.0);
        assert_eq!(inputs.hours_per_day[&Activity::WebBrowsing], 0.0);
    }

    #[test]
    fn multitasking_total_may_exceed_eight_hours() {
        let mut inputs = quiet_baseline();
        inputs.set_hours(Activity::OnlineClasses, 8.0);
        inputs.set_hours(Activity::OfficeSuite, 6.0);
        assert!(inputs.total_hours_per_day() > 8.0);
        let expected = (8.0 * 0.112 + 6.0 * 0.00901) * 250.0;
        assert!(close(inputs.annual_total_kg(Role::Student), expected));
    }

    #[test]
    fn hours_for_foreign_activities_contribute_nothing() {
        // A stale entry from a role switch must not leak into the total.
        let mut inputs = quiet_baseline();
        inputs.set_hours(Activity::ManagementSoftware, 5.0);
        assert_eq!(inputs.annual_total_kg(Role::Student), 0.0);
    }

    #[test]
    fn connectivity_gate_requires_all_three_selects() {
        let mut inputs = ActivityInputs::default();
        assert!(!inputs.connectivity_complete());
        inputs.email_plain = EmailVolume::OneToTen;
        inputs.email_attachments = EmailVolume::OverForty;
        assert!(!inputs.connectivity_complete());
        inputs.cloud = CloudBucket::UnderFiveGb;
        assert!(inputs.connectivity_complete());
    }
}
