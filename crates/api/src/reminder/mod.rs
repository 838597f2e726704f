mod get_settings;
pub mod run_tick;
mod set_settings;

use actix_web::web;
use get_settings::get_reminder_settings_controller;
use run_tick::run_tick_controller;
use set_settings::set_reminder_settings_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Administrative run-now trigger; executes one synchronous tick
    cfg.route("/reminders/tick", web::post().to(run_tick_controller));
    cfg.route(
        "/tenant/{tenant_id}/reminders/settings",
        web::get().to(get_reminder_settings_controller),
    );
    cfg.route(
        "/tenant/{tenant_id}/reminders/settings",
        web::put().to(set_reminder_settings_controller),
    );
}
