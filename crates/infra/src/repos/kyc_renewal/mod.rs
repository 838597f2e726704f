mod inmemory;
mod postgres;

pub use inmemory::InMemoryKycRenewalSourceRepo;
pub use postgres::PostgresKycRenewalSourceRepo;

use crate::repos::shared::query_structs::DueWindow;
use lexbase_reminders_domain::{NotifiableEvent, ID};

/// Read-only view over KYC documents approaching their renewal date,
/// joined to the owning client. Only verified documents are eligible; an
/// unverified document is never a candidate no matter its renewal date.
#[async_trait::async_trait]
pub trait IKycRenewalSourceRepo: Send + Sync {
    async fn find_due(
        &self,
        tenant_id: &ID,
        window: DueWindow,
    ) -> anyhow::Result<Vec<NotifiableEvent>>;
}
