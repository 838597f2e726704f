mod filing;
mod hearing;
mod kyc_renewal;
mod ledger;
mod reminder_settings;
mod shared;
mod task_deadline;
mod tenant;

use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing::info;

pub use filing::{IFilingSourceRepo, InMemoryFilingSourceRepo, PostgresFilingSourceRepo};
pub use hearing::{IHearingSourceRepo, InMemoryHearingSourceRepo, PostgresHearingSourceRepo};
pub use kyc_renewal::{
    IKycRenewalSourceRepo, InMemoryKycRenewalSourceRepo, PostgresKycRenewalSourceRepo,
};
pub use ledger::{
    INotificationLedgerRepo, InMemoryNotificationLedgerRepo, PostgresNotificationLedgerRepo,
};
pub use reminder_settings::{
    IReminderSettingsRepo, InMemoryReminderSettingsRepo, PostgresReminderSettingsRepo,
};
pub use shared::query_structs::DueWindow;
pub use task_deadline::{
    ITaskDeadlineSourceRepo, InMemoryTaskDeadlineSourceRepo, PostgresTaskDeadlineSourceRepo,
};
pub use tenant::{ITenantRepo, InMemoryTenantRepo, PostgresTenantRepo};

#[derive(Clone)]
pub struct Repos {
    pub tenants: Arc<dyn ITenantRepo>,
    pub reminder_settings: Arc<dyn IReminderSettingsRepo>,
    pub hearings: Arc<dyn IHearingSourceRepo>,
    pub filings: Arc<dyn IFilingSourceRepo>,
    pub task_deadlines: Arc<dyn ITaskDeadlineSourceRepo>,
    pub kyc_renewals: Arc<dyn IKycRenewalSourceRepo>,
    pub ledger: Arc<dyn INotificationLedgerRepo>,
}

impl Repos {
    pub async fn create_postgres(connection_string: &str) -> anyhow::Result<Self> {
        info!("DB CHECKING CONNECTION ...");
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(connection_string)
            .await?;
        info!("DB CHECKING CONNECTION ... [done]");
        Ok(Self {
            tenants: Arc::new(PostgresTenantRepo::new(pool.clone())),
            reminder_settings: Arc::new(PostgresReminderSettingsRepo::new(pool.clone())),
            hearings: Arc::new(PostgresHearingSourceRepo::new(pool.clone())),
            filings: Arc::new(PostgresFilingSourceRepo::new(pool.clone())),
            task_deadlines: Arc::new(PostgresTaskDeadlineSourceRepo::new(pool.clone())),
            kyc_renewals: Arc::new(PostgresKycRenewalSourceRepo::new(pool.clone())),
            ledger: Arc::new(PostgresNotificationLedgerRepo::new(pool)),
        })
    }

    pub fn create_inmemory() -> Self {
        Self {
            tenants: Arc::new(InMemoryTenantRepo::new()),
            reminder_settings: Arc::new(InMemoryReminderSettingsRepo::new()),
            hearings: Arc::new(InMemoryHearingSourceRepo::new()),
            filings: Arc::new(InMemoryFilingSourceRepo::new()),
            task_deadlines: Arc::new(InMemoryTaskDeadlineSourceRepo::new()),
            kyc_renewals: Arc::new(InMemoryKycRenewalSourceRepo::new()),
            ledger: Arc::new(InMemoryNotificationLedgerRepo::new()),
        }
    }
}
