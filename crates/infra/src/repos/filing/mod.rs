mod inmemory;
mod postgres;

pub use inmemory::InMemoryFilingSourceRepo;
pub use postgres::PostgresFilingSourceRepo;

use crate::repos::shared::query_structs::DueWindow;
use lexbase_reminders_domain::{NotifiableEvent, ID};

/// Read-only view over court filing deadlines, joined to case and client.
#[async_trait::async_trait]
pub trait IFilingSourceRepo: Send + Sync {
    async fn find_due(
        &self,
        tenant_id: &ID,
        window: DueWindow,
    ) -> anyhow::Result<Vec<NotifiableEvent>>;
}
