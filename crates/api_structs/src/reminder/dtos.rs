use lexbase_reminders_domain::{ReminderSettings, TickReport, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ReminderSettingsDTO {
    pub tenant_id: ID,
    pub hearing_lead_minutes: i64,
    pub filing_lead_minutes: i64,
    pub task_lead_minutes: i64,
    pub email_enabled: bool,
    pub sms_enabled: bool,
    pub whatsapp_enabled: bool,
}

impl ReminderSettingsDTO {
    pub fn new(settings: ReminderSettings) -> Self {
        Self {
            tenant_id: settings.tenant_id,
            hearing_lead_minutes: settings.hearing_lead_minutes,
            filing_lead_minutes: settings.filing_lead_minutes,
            task_lead_minutes: settings.task_lead_minutes,
            email_enabled: settings.email_enabled,
            sms_enabled: settings.sms_enabled,
            whatsapp_enabled: settings.whatsapp_enabled,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TickReportDTO {
    pub tenants_processed: usize,
    pub notifications_sent: usize,
    pub candidates_skipped: usize,
    pub tenant_failures: usize,
}

impl TickReportDTO {
    pub fn new(report: TickReport) -> Self {
        Self {
            tenants_processed: report.tenants_processed,
            notifications_sent: report.notifications_sent,
            candidates_skipped: report.candidates_skipped,
            tenant_failures: report.tenant_failures,
        }
    }
}
