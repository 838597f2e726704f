mod telemetry;

use lexbase_reminders_api::{start_reminder_tick_job, Application};
use lexbase_reminders_infra::{run_migration, setup_context};
use std::time::Duration;
use telemetry::{get_subscriber, init_subscriber};
use tracing::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    openssl_probe::init_ssl_cert_env_vars();

    let subscriber = get_subscriber("lexbase_reminders".into(), "info".into());
    init_subscriber(subscriber);

    let context = setup_context().await;
    run_migration()
        .await
        .expect("Reminder engine tables to be migrated");

    let tick_interval_secs = context.config.tick_interval_secs;
    let app = Application::new(context.clone()).await?;

    // Ticking cadence is this process's call, not the engine's. A zero
    // interval leaves only the manual run-now trigger.
    if tick_interval_secs > 0 {
        info!(
            "Starting periodic reminder tick every {} seconds",
            tick_interval_secs
        );
        start_reminder_tick_job(context, Duration::from_secs(tick_interval_secs));
    }

    app.start().await
}
