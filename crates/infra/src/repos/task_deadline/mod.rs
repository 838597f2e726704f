mod inmemory;
mod postgres;

pub use inmemory::InMemoryTaskDeadlineSourceRepo;
pub use postgres::PostgresTaskDeadlineSourceRepo;

use crate::repos::shared::query_structs::DueWindow;
use lexbase_reminders_domain::{NotifiableEvent, ID};

/// Read-only view over pending tasks, joined to the assigned team member.
/// Completed tasks are never candidates.
#[async_trait::async_trait]
pub trait ITaskDeadlineSourceRepo: Send + Sync {
    async fn find_due(
        &self,
        tenant_id: &ID,
        window: DueWindow,
    ) -> anyhow::Result<Vec<NotifiableEvent>>;
}
