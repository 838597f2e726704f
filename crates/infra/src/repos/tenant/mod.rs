mod inmemory;
mod postgres;

pub use inmemory::InMemoryTenantRepo;
pub use postgres::PostgresTenantRepo;

use lexbase_reminders_domain::Tenant;

#[async_trait::async_trait]
pub trait ITenantRepo: Send + Sync {
    async fn insert(&self, tenant: &Tenant) -> anyhow::Result<()>;
    /// Every tenant on the platform, in stable enumeration order.
    async fn all(&self) -> anyhow::Result<Vec<Tenant>>;
}
