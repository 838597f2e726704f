mod inmemory;
mod postgres;

pub use inmemory::InMemoryHearingSourceRepo;
pub use postgres::PostgresHearingSourceRepo;

use crate::repos::shared::query_structs::DueWindow;
use lexbase_reminders_domain::{NotifiableEvent, ID};

/// Read-only view over the hearing calendar. The query joins the owning
/// case and its client so every event carries recipient contact info.
#[async_trait::async_trait]
pub trait IHearingSourceRepo: Send + Sync {
    async fn find_due(
        &self,
        tenant_id: &ID,
        window: DueWindow,
    ) -> anyhow::Result<Vec<NotifiableEvent>>;
}
