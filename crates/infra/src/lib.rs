mod config;
mod repos;
mod services;
mod system;

pub use config::{Config, SmsGatewayConfig, SmtpConfig, WhatsappConfig};
use repos::Repos;
pub use repos::{
    DueWindow, IFilingSourceRepo, IHearingSourceRepo, IKycRenewalSourceRepo,
    INotificationLedgerRepo, IReminderSettingsRepo, ITaskDeadlineSourceRepo, ITenantRepo,
    InMemoryFilingSourceRepo, InMemoryHearingSourceRepo, InMemoryKycRenewalSourceRepo,
    InMemoryNotificationLedgerRepo, InMemoryReminderSettingsRepo,
    InMemoryTaskDeadlineSourceRepo, InMemoryTenantRepo,
};
pub use services::{
    DispatchError, IDispatcher, InMemoryDispatcher, ProviderDispatcher, Sent, SentMessage,
};
use sqlx::migrate::MigrateError;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
pub use system::{ISys, RealSys, StaticTimeSys};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct Context {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub dispatcher: Arc<dyn IDispatcher>,
    /// Single-flight guard: a tick holds this for its whole duration so a
    /// manual run-now cannot interleave with the periodic trigger.
    pub tick_lock: Arc<Mutex<()>>,
}

struct ContextParams {
    pub postgres_connection_string: String,
}

impl Context {
    async fn create(params: ContextParams) -> Self {
        let repos = Repos::create_postgres(&params.postgres_connection_string)
            .await
            .expect("Postgres credentials must be set and valid");
        let config = Config::new();
        let dispatcher = Arc::new(ProviderDispatcher::from_config(&config));
        Self {
            repos,
            config,
            sys: Arc::new(RealSys {}),
            dispatcher,
            tick_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config: Config::new(),
            sys: Arc::new(RealSys {}),
            dispatcher: Arc::new(InMemoryDispatcher::new()),
            tick_lock: Arc::new(Mutex::new(())),
        }
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> Context {
    Context::create(ContextParams {
        postgres_connection_string: get_psql_connection_string(),
    })
    .await
}

/// Context backed entirely by in-memory repositories and a recording
/// dispatcher. Used by tests.
pub fn setup_context_inmemory() -> Context {
    Context::create_inmemory()
}

fn get_psql_connection_string() -> String {
    const PSQL_CONNECTION_STRING: &str = "DATABASE_URL";

    std::env::var(PSQL_CONNECTION_STRING)
        .unwrap_or_else(|_| panic!("{} env var to be present.", PSQL_CONNECTION_STRING))
}

/// Creates the engine-owned tables (reminder settings and the notification
/// ledger). Idempotent; run once at startup before steady-state ticking.
pub async fn run_migration() -> Result<(), MigrateError> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&get_psql_connection_string())
        .await
        .expect("TO CONNECT TO POSTGRES");

    sqlx::migrate!().run(&pool).await
}
