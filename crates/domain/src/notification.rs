use crate::channel::Channel;
use crate::shared::entity::ID;
use chrono::{TimeZone, Utc};
use std::fmt::Display;

/// The kind of source record a reminder refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Hearing,
    Filing,
    TaskDeadline,
    KycRenewal,
}

impl EventKind {
    /// Processing order within a tick is fixed.
    pub fn all() -> [EventKind; 4] {
        [
            EventKind::Hearing,
            EventKind::Filing,
            EventKind::TaskDeadline,
            EventKind::KycRenewal,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Hearing => "hearing",
            EventKind::Filing => "filing",
            EventKind::TaskDeadline => "task_deadline",
            EventKind::KycRenewal => "kyc_renewal",
        }
    }
}

impl Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A candidate reminder produced by one of the source queries. This is a
/// derived view over records owned by the case/calendar/task/KYC subsystems
/// and is rebuilt from scratch on every tick, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct NotifiableEvent {
    pub tenant_id: ID,
    pub kind: EventKind,
    pub entity_id: ID,
    /// When the underlying hearing/deadline/renewal occurs, in millis
    pub scheduled_at: i64,
    pub title: String,
    /// Case number or other context line, when the source record has one
    pub reference: Option<String>,
    pub recipient_name: String,
    pub recipient_email: Option<String>,
    pub recipient_phone: Option<String>,
}

impl NotifiableEvent {
    /// Resolves the channel-level address for this event's recipient.
    /// `None` means the recipient cannot be reached on that channel; the
    /// event stays a candidate for the other channels.
    pub fn address(&self, channel: Channel) -> Option<String> {
        match channel {
            Channel::Email => self.recipient_email.clone(),
            Channel::Sms => self.recipient_phone.clone(),
            Channel::Whatsapp => self
                .recipient_phone
                .as_ref()
                .map(|phone| format!("whatsapp:{}", phone)),
        }
    }

    pub fn subject(&self) -> String {
        match self.kind {
            EventKind::Hearing => format!("Hearing reminder: {}", self.title),
            EventKind::Filing => format!("Filing deadline reminder: {}", self.title),
            EventKind::TaskDeadline => format!("Task deadline reminder: {}", self.title),
            EventKind::KycRenewal => format!("KYC renewal due: {}", self.title),
        }
    }

    pub fn body(&self) -> String {
        let when = Utc
            .timestamp_millis(self.scheduled_at)
            .format("%Y-%m-%d %H:%M UTC");
        let what = match &self.reference {
            Some(reference) => format!("{} ({})", self.title, reference),
            None => self.title.clone(),
        };
        match self.kind {
            EventKind::Hearing => format!(
                "Dear {}, this is a reminder that the hearing {} is scheduled for {}.",
                self.recipient_name, what, when
            ),
            EventKind::Filing => format!(
                "Dear {}, the filing {} is due on {}.",
                self.recipient_name, what, when
            ),
            EventKind::TaskDeadline => format!(
                "Dear {}, the task {} is due on {}.",
                self.recipient_name, what, when
            ),
            EventKind::KycRenewal => format!(
                "Dear {}, your {} needs to be renewed by {}. Please contact your firm to refresh the paperwork.",
                self.recipient_name, what, when
            ),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn event_with_contact(email: Option<&str>, phone: Option<&str>) -> NotifiableEvent {
        NotifiableEvent {
            tenant_id: ID::new(),
            kind: EventKind::Hearing,
            entity_id: ID::new(),
            scheduled_at: 1633086000000,
            title: "Preliminary hearing".into(),
            reference: Some("C-2021-042".into()),
            recipient_name: "Ada Hansen".into(),
            recipient_email: email.map(|e| e.to_string()),
            recipient_phone: phone.map(|p| p.to_string()),
        }
    }

    #[test]
    fn whatsapp_address_uses_templated_form() {
        let event = event_with_contact(None, Some("+4799887766"));
        assert_eq!(
            event.address(Channel::Whatsapp),
            Some("whatsapp:+4799887766".to_string())
        );
        assert_eq!(event.address(Channel::Sms), Some("+4799887766".to_string()));
        assert_eq!(event.address(Channel::Email), None);
    }

    #[test]
    fn email_only_recipient_is_unreachable_on_phone_channels() {
        let event = event_with_contact(Some("ada@example.com"), None);
        assert_eq!(event.address(Channel::Email), Some("ada@example.com".to_string()));
        assert_eq!(event.address(Channel::Sms), None);
        assert_eq!(event.address(Channel::Whatsapp), None);
    }

    #[test]
    fn body_mentions_recipient_and_case_reference() {
        let event = event_with_contact(Some("ada@example.com"), None);
        let body = event.body();
        assert!(body.contains("Ada Hansen"));
        assert!(body.contains("C-2021-042"));
        assert!(event.subject().contains("Preliminary hearing"));
    }
}
