use crate::reminder::run_tick::RunTickUseCase;
use crate::shared::usecase::execute;
use actix_web::rt::time::interval;
use lexbase_reminders_infra::Context;
use std::time::Duration;

/// Periodic trigger for the reminder tick. The engine itself never starts
/// this; whether and how often to tick is the host process's decision. A
/// beat that overlaps a still-running tick resolves to a conflict and is
/// simply skipped.
pub fn start_reminder_tick_job(ctx: Context, tick_interval: Duration) {
    actix_web::rt::spawn(async move {
        let mut interval = interval(tick_interval);
        loop {
            interval.tick().await;

            let usecase = RunTickUseCase {};
            let _ = execute(usecase, &ctx).await;
        }
    });
}
