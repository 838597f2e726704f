use crate::channel::Channel;
use crate::notification::EventKind;
use crate::shared::entity::ID;

/// One row of the notification ledger. A record is written after a
/// successful dispatch and never updated or deleted. The composite key
/// `(tenant_id, entity_type, entity_id, recipient, channel)` carries the
/// at-most-once guarantee: the storage layer enforces uniqueness on it.
#[derive(Debug, Clone, PartialEq)]
pub struct DedupRecord {
    pub tenant_id: ID,
    pub entity_type: EventKind,
    pub entity_id: ID,
    pub recipient: String,
    pub channel: Channel,
    pub sent_at: i64,
}

impl DedupRecord {
    pub fn new(
        tenant_id: ID,
        entity_type: EventKind,
        entity_id: ID,
        recipient: String,
        channel: Channel,
        sent_at: i64,
    ) -> Self {
        Self {
            tenant_id,
            entity_type,
            entity_id,
            recipient,
            channel,
            sent_at,
        }
    }

    pub fn same_key(&self, other: &DedupRecord) -> bool {
        self.tenant_id == other.tenant_id
            && self.entity_type == other.entity_type
            && self.entity_id == other.entity_id
            && self.recipient == other.recipient
            && self.channel == other.channel
    }
}
