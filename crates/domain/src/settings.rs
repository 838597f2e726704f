use crate::channel::Channel;
use crate::shared::entity::{Entity, ID};

/// KYC renewals use a fixed planning horizon instead of a per-tenant lead
/// time. Renewal paperwork needs days of runway, not minutes.
pub const KYC_RENEWAL_WINDOW_MINUTES: i64 = 7 * 24 * 60;

/// Per-tenant reminder configuration. One row per tenant, mutated only
/// through the administrative settings API. A tenant without a stored row is
/// served `ReminderSettings::defaults`.
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderSettings {
    pub tenant_id: ID,
    /// Minutes before a hearing during which a reminder is due
    pub hearing_lead_minutes: i64,
    /// Minutes before a filing deadline during which a reminder is due
    pub filing_lead_minutes: i64,
    /// Minutes before a task deadline during which a reminder is due
    pub task_lead_minutes: i64,
    pub email_enabled: bool,
    pub sms_enabled: bool,
    pub whatsapp_enabled: bool,
}

impl ReminderSettings {
    pub fn defaults(tenant_id: ID) -> Self {
        Self {
            tenant_id,
            hearing_lead_minutes: 60,
            filing_lead_minutes: 60,
            task_lead_minutes: 60,
            email_enabled: true,
            sms_enabled: false,
            whatsapp_enabled: false,
        }
    }

    pub fn channel_enabled(&self, channel: Channel) -> bool {
        match channel {
            Channel::Email => self.email_enabled,
            Channel::Sms => self.sms_enabled,
            Channel::Whatsapp => self.whatsapp_enabled,
        }
    }
}

impl Entity for ReminderSettings {
    fn id(&self) -> &ID {
        &self.tenant_id
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_settings_enable_email_only() {
        let settings = ReminderSettings::defaults(ID::new());
        assert_eq!(settings.hearing_lead_minutes, 60);
        assert_eq!(settings.filing_lead_minutes, 60);
        assert_eq!(settings.task_lead_minutes, 60);
        assert!(settings.channel_enabled(Channel::Email));
        assert!(!settings.channel_enabled(Channel::Sms));
        assert!(!settings.channel_enabled(Channel::Whatsapp));
    }
}
