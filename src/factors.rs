use serde::{Deserialize, Serialize};

/// Work/study days per year used to annualize all daily figures.
pub const DAYS: f64 = 250.0;

/// Hours per day a computer sits outside active use.
pub const IDLE_HOURS_PER_DAY: f64 = 16.0;

// Per-unit constants for the connectivity block, kg CO2e.
pub const EMAIL_PLAIN_KG: f64 = 0.004;
pub const EMAIL_ATTACH_KG: f64 = 0.035;
pub const CLOUD_KG_PER_GB: f64 = 0.01;
pub const WIFI_KG_PER_HOUR: f64 = 0.00584;
pub const PRINT_KG_PER_PAGE: f64 = 0.0045;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Role {
    Student,
    Professor,
    StaffMember,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Professor => "Professor",
            Role::StaffMember => "Staff Member",
        }
    }

    /// Activities offered to this role, in display order.
    pub fn activities(&self) -> &'static [Activity] {
        match self {
            Role::Student => &[
                Activity::OfficeSuite,
                Activity::TechnicalSoftware,
                Activity::WebBrowsing,
                Activity::LectureRecordings,
                Activity::OnlineClasses,
                Activity::ReadingMaterials,
            ],
            Role::Professor => &[
                Activity::OfficeSuite,
                Activity::WebBrowsing,
                Activity::VideoCall,
                Activity::OnlineClasses,
                Activity::ReadingMaterials,
                Activity::TechnicalSoftware,
            ],
            Role::StaffMember => &[
                Activity::OfficeSuite,
                Activity::ManagementSoftware,
                Activity::WebBrowsing,
                Activity::VideoCall,
                Activity::ReadingMaterials,
            ],
        }
    }

    /// Expected average footprint for this role, kg CO2e per year.
    ///
    /// All three figures are the same placeholder carried from the reference
    /// data; they are not calibrated against any published study yet.
    pub fn average_annual_kg(&self) -> f64 {
        match self {
            Role::Student => 300.0,
            Role::Professor => 300.0,
            Role::StaffMember => 300.0,
        }
    }
}

#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "camelCase")]
pub enum Activity {
    OfficeSuite,
    TechnicalSoftware,
    WebBrowsing,
    LectureRecordings,
    OnlineClasses,
    VideoCall,
    ReadingMaterials,
    ManagementSoftware,
}

impl Activity {
    pub fn label(&self) -> &'static str {
        match self {
            Activity::OfficeSuite => "MS Office (e.g. Excel, Word, PPT…)",
            Activity::TechnicalSoftware => "Technical softwares (e.g. Matlab, Python…)",
            Activity::WebBrowsing => "Web browsing",
            Activity::LectureRecordings => "Watching lecture recordings",
            Activity::OnlineClasses => "Online classes streaming or video call",
            Activity::VideoCall => "Videocall (e.g. Zoom, Teams…)",
            Activity::ReadingMaterials => {
                "Reading materials on your computer (e.g. slides, articles, digital textbooks)"
            }
            Activity::ManagementSoftware => "Management software (e.g. SAP)",
        }
    }
}

/// kg CO2e per hour for an activity performed by a given role.
///
/// Activities a role is never asked about resolve to 0 rather than failing,
/// so a stale hour entry contributes nothing.
pub fn activity_factor(role: Role, activity: Activity) -> f64 {
    if !role.activities().contains(&activity) {
        return 0.0;
    }
    match activity {
        Activity::OfficeSuite => 0.00901,
        Activity::TechnicalSoftware => 0.00901,
        Activity::WebBrowsing => 0.0264,
        Activity::LectureRecordings => 0.0439,
        Activity::OnlineClasses => 0.112,
        Activity::VideoCall => 0.112,
        Activity::ReadingMaterials => 0.00901,
        Activity::ManagementSoftware => 0.00901,
    }
}

#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "camelCase")]
pub enum DeviceType {
    DesktopComputer,
    LaptopComputer,
    Smartphone,
    Tablet,
    ExternalMonitor,
    Headphones,
    Printer,
    RouterModem,
}

impl DeviceType {
    pub const ALL: [DeviceType; 8] = [
        DeviceType::DesktopComputer,
        DeviceType::LaptopComputer,
        DeviceType::Smartphone,
        DeviceType::Tablet,
        DeviceType::ExternalMonitor,
        DeviceType::Headphones,
        DeviceType::Printer,
        DeviceType::RouterModem,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DeviceType::DesktopComputer => "Desktop Computer",
            DeviceType::LaptopComputer => "Laptop Computer",
            DeviceType::Smartphone => "Smartphone",
            DeviceType::Tablet => "Tablet",
            DeviceType::ExternalMonitor => "External Monitor",
            DeviceType::Headphones => "Headphones",
            DeviceType::Printer => "Printer",
            DeviceType::RouterModem => "Router/Modem",
        }
    }

    /// Embodied production emissions, kg CO2e per unit.
    pub fn production_kg(&self) -> f64 {
        match self {
            DeviceType::DesktopComputer => 296.0,
            DeviceType::LaptopComputer => 170.0,
            DeviceType::Smartphone => 38.4,
            DeviceType::Tablet => 87.1,
            DeviceType::ExternalMonitor => 235.0,
            DeviceType::Headphones => 12.17,
            DeviceType::Printer => 62.3,
            DeviceType::RouterModem => 106.0,
        }
    }
}

#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "camelCase")]
pub enum DisposalMethod {
    CollectionCenter,
    GeneralWaste,
    ReturnToManufacturer,
    SellOrDonate,
    StoreAtHome,
}

impl DisposalMethod {
    pub const ALL: [DisposalMethod; 5] = [
        DisposalMethod::CollectionCenter,
        DisposalMethod::GeneralWaste,
        DisposalMethod::ReturnToManufacturer,
        DisposalMethod::SellOrDonate,
        DisposalMethod::StoreAtHome,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DisposalMethod::CollectionCenter => {
                "I bring it to a certified e-waste collection center"
            }
            DisposalMethod::GeneralWaste => "I throw it away in general waste",
            DisposalMethod::ReturnToManufacturer => {
                "I return it to manufacturer for recycling or reuse"
            }
            DisposalMethod::SellOrDonate => "I sell or donate it to someone else",
            DisposalMethod::StoreAtHome => "I store it at home, unused",
        }
    }

    /// Signed end-of-life modifier; negative values are emissions avoided.
    pub fn modifier(&self) -> f64 {
        match self {
            DisposalMethod::CollectionCenter => -0.224,
            DisposalMethod::GeneralWaste => 0.611,
            DisposalMethod::ReturnToManufacturer => -0.3665,
            DisposalMethod::SellOrDonate => -0.445,
            DisposalMethod::StoreAtHome => 0.402,
        }
    }

    /// True for the disposal choices that avoid emissions.
    pub fn is_favorable(&self) -> bool {
        self.modifier() < 0.0
    }
}

#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "camelCase")]
pub enum AiTask {
    SummarizeTexts,
    TranslateTexts,
    ExplainConcept,
    GenerateQuizzes,
    WriteEmails,
    CorrectGrammar,
    AnalyzePdfs,
    WriteCode,
    GenerateImages,
    Brainstorm,
    ExplainCode,
    PrepareLessons,
}

impl AiTask {
    pub const ALL: [AiTask; 12] = [
        AiTask::SummarizeTexts,
        AiTask::TranslateTexts,
        AiTask::ExplainConcept,
        AiTask::GenerateQuizzes,
        AiTask::WriteEmails,
        AiTask::CorrectGrammar,
        AiTask::AnalyzePdfs,
        AiTask::WriteCode,
        AiTask::GenerateImages,
        AiTask::Brainstorm,
        AiTask::ExplainCode,
        AiTask::PrepareLessons,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AiTask::SummarizeTexts => "Summarize texts or articles",
            AiTask::TranslateTexts => "Translate sentences or texts",
            AiTask::ExplainConcept => "Explain a concept",
            AiTask::GenerateQuizzes => "Generate quizzes or questions",
            AiTask::WriteEmails => "Write formal emails or messages",
            AiTask::CorrectGrammar => "Correct grammar or style",
            AiTask::AnalyzePdfs => "Analyze long PDF documents",
            AiTask::WriteCode => "Write or test code",
            AiTask::GenerateImages => "Generate images",
            AiTask::Brainstorm => "Brainstorm for thesis or projects",
            AiTask::ExplainCode => "Explain code step-by-step",
            AiTask::PrepareLessons => "Prepare lessons or presentations",
        }
    }

    /// kg CO2e per query.
    pub fn per_query_kg(&self) -> f64 {
        match self {
            AiTask::SummarizeTexts => 0.000711936,
            AiTask::TranslateTexts => 0.000363008,
            AiTask::ExplainConcept => 0.000310784,
            AiTask::GenerateQuizzes => 0.000539136,
            AiTask::WriteEmails => 0.000107776,
            AiTask::CorrectGrammar => 0.000107776,
            AiTask::AnalyzePdfs => 0.001412608,
            AiTask::WriteCode => 0.002337024,
            AiTask::GenerateImages => 0.00206,
            AiTask::Brainstorm => 0.000310784,
            AiTask::ExplainCode => 0.003542528,
            AiTask::PrepareLessons => 0.000539136,
        }
    }
}

/// Daily email count bucket. `Unset` contributes nothing until the user picks
/// an option, but the page gate requires an explicit choice.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum EmailVolume {
    Unset,
    OneToTen,
    ElevenToTwenty,
    TwentyOneToThirty,
    ThirtyOneToForty,
    OverForty,
}

impl Default for EmailVolume {
    fn default() -> Self {
        EmailVolume::Unset
    }
}

impl EmailVolume {
    pub fn label(&self) -> &'static str {
        match self {
            EmailVolume::Unset => "-- Select option --",
            EmailVolume::OneToTen => "1–10",
            EmailVolume::ElevenToTwenty => "11–20",
            EmailVolume::TwentyOneToThirty => "21–30",
            EmailVolume::ThirtyOneToForty => "31–40",
            EmailVolume::OverForty => "> 40",
        }
    }

    /// Bucket midpoint, emails per day.
    pub fn midpoint(&self) -> f64 {
        match self {
            EmailVolume::Unset => 0.0,
            EmailVolume::OneToTen => 5.0,
            EmailVolume::ElevenToTwenty => 15.0,
            EmailVolume::TwentyOneToThirty => 25.0,
            EmailVolume::ThirtyOneToForty => 35.0,
            EmailVolume::OverForty => 50.0,
        }
    }

    pub fn is_set(&self) -> bool {
        *self != EmailVolume::Unset
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum CloudBucket {
    Unset,
    UnderFiveGb,
    FiveToTwentyGb,
    TwentyToFiftyGb,
    FiftyToHundredGb,
}

impl Default for CloudBucket {
    fn default() -> Self {
        CloudBucket::Unset
    }
}

impl CloudBucket {
    pub fn label(&self) -> &'static str {
        match self {
            CloudBucket::Unset => "-- Select option --",
            CloudBucket::UnderFiveGb => "<5GB",
            CloudBucket::FiveToTwentyGb => "5–20GB",
            CloudBucket::TwentyToFiftyGb => "20–50GB",
            CloudBucket::FiftyToHundredGb => "50–100GB",
        }
    }

    /// Bucket midpoint, GB stored.
    pub fn midpoint_gb(&self) -> f64 {
        match self {
            CloudBucket::Unset => 0.0,
            CloudBucket::UnderFiveGb => 2.5,
            CloudBucket::FiveToTwentyGb => 12.5,
            CloudBucket::TwentyToFiftyGb => 35.0,
            CloudBucket::FiftyToHundredGb => 75.0,
        }
    }

    pub fn is_set(&self) -> bool {
        *self != CloudBucket::Unset
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum IdleHabit {
    TurnOff,
    LeaveOn,
    NoComputer,
}

impl Default for IdleHabit {
    fn default() -> Self {
        IdleHabit::TurnOff
    }
}

impl IdleHabit {
    pub fn label(&self) -> &'static str {
        match self {
            IdleHabit::TurnOff => "I turn it off",
            IdleHabit::LeaveOn => "I leave it on (idle mode)",
            IdleHabit::NoComputer => "I don’t have a computer",
        }
    }

    /// kg CO2e per idle hour.
    pub fn per_hour_kg(&self) -> f64 {
        match self {
            IdleHabit::TurnOff => 0.0005204,
            IdleHabit::LeaveOn => 0.0104,
            IdleHabit::NoComputer => 0.0,
        }
    }
}
