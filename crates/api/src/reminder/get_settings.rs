use crate::error::LexbaseError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use lexbase_reminders_api_structs::get_reminder_settings::{APIResponse, PathParams};
use lexbase_reminders_domain::{ReminderSettings, ID};
use lexbase_reminders_infra::Context;

pub async fn get_reminder_settings_controller(
    ctx: web::Data<Context>,
    path: web::Path<PathParams>,
) -> Result<HttpResponse, LexbaseError> {
    let usecase = GetReminderSettingsUseCase {
        tenant_id: path.tenant_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|settings| HttpResponse::Ok().json(APIResponse::new(settings)))
        .map_err(LexbaseError::from)
}

#[derive(Debug)]
pub struct GetReminderSettingsUseCase {
    pub tenant_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {}

impl From<UseCaseError> for LexbaseError {
    fn from(e: UseCaseError) -> Self {
        match e {}
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetReminderSettingsUseCase {
    type Response = ReminderSettings;

    type Error = UseCaseError;

    const NAME: &'static str = "GetReminderSettings";

    /// Never fails: a tenant without a stored row gets the defaults.
    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        Ok(ctx.repos.reminder_settings.get(&self.tenant_id).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexbase_reminders_infra::setup_context_inmemory;

    #[actix_web::main]
    #[test]
    async fn returns_defaults_for_tenant_without_a_row() {
        let ctx = setup_context_inmemory();
        let tenant_id = ID::new();

        let mut usecase = GetReminderSettingsUseCase {
            tenant_id: tenant_id.clone(),
        };
        let settings = usecase.execute(&ctx).await.expect("Settings to resolve");
        assert_eq!(settings, ReminderSettings::defaults(tenant_id));
    }
}
