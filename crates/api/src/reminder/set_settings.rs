use crate::error::LexbaseError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use lexbase_reminders_api_structs::set_reminder_settings::{APIResponse, PathParams, RequestBody};
use lexbase_reminders_domain::{ReminderSettings, ID};
use lexbase_reminders_infra::Context;

pub async fn set_reminder_settings_controller(
    ctx: web::Data<Context>,
    path: web::Path<PathParams>,
    body: web::Json<RequestBody>,
) -> Result<HttpResponse, LexbaseError> {
    let body = body.into_inner();
    let usecase = SetReminderSettingsUseCase {
        tenant_id: path.tenant_id.clone(),
        hearing_lead_minutes: body.hearing_lead_minutes,
        filing_lead_minutes: body.filing_lead_minutes,
        task_lead_minutes: body.task_lead_minutes,
        email_enabled: body.email_enabled,
        sms_enabled: body.sms_enabled,
        whatsapp_enabled: body.whatsapp_enabled,
    };

    execute(usecase, &ctx)
        .await
        .map(|settings| HttpResponse::Ok().json(APIResponse::new(settings)))
        .map_err(LexbaseError::from)
}

/// Partial update: absent fields keep the stored (or default) values.
#[derive(Debug)]
pub struct SetReminderSettingsUseCase {
    pub tenant_id: ID,
    pub hearing_lead_minutes: Option<i64>,
    pub filing_lead_minutes: Option<i64>,
    pub task_lead_minutes: Option<i64>,
    pub email_enabled: Option<bool>,
    pub sms_enabled: Option<bool>,
    pub whatsapp_enabled: Option<bool>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    InvalidLeadTime(i64),
    StorageError,
}

impl From<UseCaseError> for LexbaseError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidLeadTime(minutes) => Self::BadClientData(format!(
                "Lead times must be positive, got: {}",
                minutes
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for SetReminderSettingsUseCase {
    type Response = ReminderSettings;

    type Error = UseCaseError;

    const NAME: &'static str = "SetReminderSettings";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        for lead_minutes in [
            self.hearing_lead_minutes,
            self.filing_lead_minutes,
            self.task_lead_minutes,
        ]
        .iter()
        .flatten()
        {
            if *lead_minutes <= 0 {
                return Err(UseCaseError::InvalidLeadTime(*lead_minutes));
            }
        }

        let mut settings = ctx.repos.reminder_settings.get(&self.tenant_id).await;
        if let Some(minutes) = self.hearing_lead_minutes {
            settings.hearing_lead_minutes = minutes;
        }
        if let Some(minutes) = self.filing_lead_minutes {
            settings.filing_lead_minutes = minutes;
        }
        if let Some(minutes) = self.task_lead_minutes {
            settings.task_lead_minutes = minutes;
        }
        if let Some(enabled) = self.email_enabled {
            settings.email_enabled = enabled;
        }
        if let Some(enabled) = self.sms_enabled {
            settings.sms_enabled = enabled;
        }
        if let Some(enabled) = self.whatsapp_enabled {
            settings.whatsapp_enabled = enabled;
        }

        match ctx.repos.reminder_settings.upsert(&settings).await {
            Ok(_) => Ok(settings),
            Err(_) => Err(UseCaseError::StorageError),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexbase_reminders_infra::setup_context_inmemory;

    fn usecase_for(tenant_id: &ID) -> SetReminderSettingsUseCase {
        SetReminderSettingsUseCase {
            tenant_id: tenant_id.clone(),
            hearing_lead_minutes: None,
            filing_lead_minutes: None,
            task_lead_minutes: None,
            email_enabled: None,
            sms_enabled: None,
            whatsapp_enabled: None,
        }
    }

    #[actix_web::main]
    #[test]
    async fn partial_update_keeps_other_fields() {
        let ctx = setup_context_inmemory();
        let tenant_id = ID::new();

        let mut usecase = usecase_for(&tenant_id);
        usecase.hearing_lead_minutes = Some(120);
        usecase.sms_enabled = Some(true);
        let settings = usecase.execute(&ctx).await.expect("Settings to update");

        assert_eq!(settings.hearing_lead_minutes, 120);
        assert_eq!(settings.filing_lead_minutes, 60);
        assert!(settings.email_enabled);
        assert!(settings.sms_enabled);

        let stored = ctx.repos.reminder_settings.get(&tenant_id).await;
        assert_eq!(stored, settings);
    }

    #[actix_web::main]
    #[test]
    async fn it_rejects_non_positive_lead_times() {
        let ctx = setup_context_inmemory();
        let tenant_id = ID::new();

        for bad_lead in [0, -1, -60] {
            let mut usecase = usecase_for(&tenant_id);
            usecase.task_lead_minutes = Some(bad_lead);
            let res = usecase.execute(&ctx).await;
            assert_eq!(res, Err(UseCaseError::InvalidLeadTime(bad_lead)));
        }

        // Nothing was stored along the way
        assert!(ctx.repos.reminder_settings.find(&tenant_id).await.is_none());
    }
}
