mod inmemory;
mod postgres;

pub use inmemory::InMemoryReminderSettingsRepo;
pub use postgres::PostgresReminderSettingsRepo;

use lexbase_reminders_domain::{ReminderSettings, ID};

#[async_trait::async_trait]
pub trait IReminderSettingsRepo: Send + Sync {
    async fn find(&self, tenant_id: &ID) -> Option<ReminderSettings>;
    /// Insert-or-update keyed by tenant id.
    async fn upsert(&self, settings: &ReminderSettings) -> anyhow::Result<()>;

    /// Settings reads never fail: a tenant without a stored row gets the
    /// defaults. The scheduler only ever goes through this method.
    async fn get(&self, tenant_id: &ID) -> ReminderSettings {
        match self.find(tenant_id).await {
            Some(settings) => settings,
            None => ReminderSettings::defaults(tenant_id.clone()),
        }
    }
}
