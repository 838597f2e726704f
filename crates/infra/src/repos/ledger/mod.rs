mod inmemory;
mod postgres;

pub use inmemory::InMemoryNotificationLedgerRepo;
pub use postgres::PostgresNotificationLedgerRepo;

use lexbase_reminders_domain::{Channel, DedupRecord, EventKind, ID};

/// Append-only record of notifications already delivered. This is the only
/// mechanism suppressing repeat sends across ticks; rows are never updated
/// or deleted.
#[async_trait::async_trait]
pub trait INotificationLedgerRepo: Send + Sync {
    async fn was_sent(
        &self,
        tenant_id: &ID,
        entity_type: EventKind,
        entity_id: &ID,
        recipient: &str,
        channel: Channel,
    ) -> anyhow::Result<bool>;

    /// Inserting an already-recorded key is success, not an error: the
    /// check-then-insert sequence around a dispatch is not otherwise
    /// guarded, so a conflicting row means the notification went out.
    async fn record_sent(&self, record: &DedupRecord) -> anyhow::Result<()>;
}
