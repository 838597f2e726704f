use crate::dtos::{ReminderSettingsDTO, TickReportDTO};
use lexbase_reminders_domain::{ReminderSettings, TickReport, ID};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderSettingsResponse {
    pub settings: ReminderSettingsDTO,
}

impl ReminderSettingsResponse {
    pub fn new(settings: ReminderSettings) -> Self {
        Self {
            settings: ReminderSettingsDTO::new(settings),
        }
    }
}

pub mod get_reminder_settings {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub tenant_id: ID,
    }

    pub type APIResponse = ReminderSettingsResponse;
}

pub mod set_reminder_settings {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub tenant_id: ID,
    }

    /// Absent fields keep the stored (or default) values.
    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        #[serde(default)]
        pub hearing_lead_minutes: Option<i64>,
        #[serde(default)]
        pub filing_lead_minutes: Option<i64>,
        #[serde(default)]
        pub task_lead_minutes: Option<i64>,
        #[serde(default)]
        pub email_enabled: Option<bool>,
        #[serde(default)]
        pub sms_enabled: Option<bool>,
        #[serde(default)]
        pub whatsapp_enabled: Option<bool>,
    }

    pub type APIResponse = ReminderSettingsResponse;
}

pub mod run_tick {
    use super::*;

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub report: TickReportDTO,
    }

    impl APIResponse {
        pub fn new(report: TickReport) -> Self {
            Self {
                report: TickReportDTO::new(report),
            }
        }
    }
}
