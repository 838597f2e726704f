use crate::notification::{EventKind, NotifiableEvent};
use crate::shared::entity::{Entity, ID};

/// Denormalized read models produced by the source queries. Each row is a
/// join over records owned by other subsystems (case -> client, task ->
/// assignee) so that recipient contact info travels with the event.

#[derive(Debug, Clone)]
pub struct HearingRecord {
    pub id: ID,
    pub tenant_id: ID,
    pub case_number: String,
    pub title: String,
    pub starts_at: i64,
    pub client_name: String,
    pub client_email: Option<String>,
    pub client_phone: Option<String>,
}

impl HearingRecord {
    pub fn to_notification(&self) -> NotifiableEvent {
        NotifiableEvent {
            tenant_id: self.tenant_id.clone(),
            kind: EventKind::Hearing,
            entity_id: self.id.clone(),
            scheduled_at: self.starts_at,
            title: self.title.clone(),
            reference: Some(self.case_number.clone()),
            recipient_name: self.client_name.clone(),
            recipient_email: self.client_email.clone(),
            recipient_phone: self.client_phone.clone(),
        }
    }
}

impl Entity for HearingRecord {
    fn id(&self) -> &ID {
        &self.id
    }
}

#[derive(Debug, Clone)]
pub struct FilingRecord {
    pub id: ID,
    pub tenant_id: ID,
    pub case_number: String,
    pub title: String,
    pub due_at: i64,
    pub client_name: String,
    pub client_email: Option<String>,
    pub client_phone: Option<String>,
}

impl FilingRecord {
    pub fn to_notification(&self) -> NotifiableEvent {
        NotifiableEvent {
            tenant_id: self.tenant_id.clone(),
            kind: EventKind::Filing,
            entity_id: self.id.clone(),
            scheduled_at: self.due_at,
            title: self.title.clone(),
            reference: Some(self.case_number.clone()),
            recipient_name: self.client_name.clone(),
            recipient_email: self.client_email.clone(),
            recipient_phone: self.client_phone.clone(),
        }
    }
}

impl Entity for FilingRecord {
    fn id(&self) -> &ID {
        &self.id
    }
}

#[derive(Debug, Clone)]
pub struct TaskRecord {
    pub id: ID,
    pub tenant_id: ID,
    pub title: String,
    pub due_at: i64,
    pub completed: bool,
    pub assignee_name: String,
    pub assignee_email: Option<String>,
    pub assignee_phone: Option<String>,
}

impl TaskRecord {
    pub fn to_notification(&self) -> NotifiableEvent {
        NotifiableEvent {
            tenant_id: self.tenant_id.clone(),
            kind: EventKind::TaskDeadline,
            entity_id: self.id.clone(),
            scheduled_at: self.due_at,
            title: self.title.clone(),
            reference: None,
            recipient_name: self.assignee_name.clone(),
            recipient_email: self.assignee_email.clone(),
            recipient_phone: self.assignee_phone.clone(),
        }
    }
}

impl Entity for TaskRecord {
    fn id(&self) -> &ID {
        &self.id
    }
}

#[derive(Debug, Clone)]
pub struct KycRecord {
    pub id: ID,
    pub tenant_id: ID,
    pub document_kind: String,
    pub renewal_reminder_at: i64,
    pub is_verified: bool,
    pub client_name: String,
    pub client_email: Option<String>,
    pub client_phone: Option<String>,
}

impl KycRecord {
    pub fn to_notification(&self) -> NotifiableEvent {
        NotifiableEvent {
            tenant_id: self.tenant_id.clone(),
            kind: EventKind::KycRenewal,
            entity_id: self.id.clone(),
            scheduled_at: self.renewal_reminder_at,
            title: self.document_kind.clone(),
            reference: None,
            recipient_name: self.client_name.clone(),
            recipient_email: self.client_email.clone(),
            recipient_phone: self.client_phone.clone(),
        }
    }
}

impl Entity for KycRecord {
    fn id(&self) -> &ID {
        &self.id
    }
}
