use super::IReminderSettingsRepo;
use lexbase_reminders_domain::{ReminderSettings, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use tracing::error;

pub struct PostgresReminderSettingsRepo {
    pool: PgPool,
}

impl PostgresReminderSettingsRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ReminderSettingsRaw {
    tenant_uid: Uuid,
    hearing_lead_minutes: i64,
    filing_lead_minutes: i64,
    task_lead_minutes: i64,
    email_enabled: bool,
    sms_enabled: bool,
    whatsapp_enabled: bool,
}

impl From<ReminderSettingsRaw> for ReminderSettings {
    fn from(e: ReminderSettingsRaw) -> Self {
        Self {
            tenant_id: e.tenant_uid.into(),
            hearing_lead_minutes: e.hearing_lead_minutes,
            filing_lead_minutes: e.filing_lead_minutes,
            task_lead_minutes: e.task_lead_minutes,
            email_enabled: e.email_enabled,
            sms_enabled: e.sms_enabled,
            whatsapp_enabled: e.whatsapp_enabled,
        }
    }
}

#[async_trait::async_trait]
impl IReminderSettingsRepo for PostgresReminderSettingsRepo {
    async fn find(&self, tenant_id: &ID) -> Option<ReminderSettings> {
        let res: Option<ReminderSettingsRaw> = sqlx::query_as::<_, ReminderSettingsRaw>(
            r#"
            SELECT * FROM reminder_settings
            WHERE tenant_uid = $1
            "#,
        )
        .bind(*tenant_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find reminder settings for tenant: {} failed. DB returned error: {:?}",
                tenant_id, e
            );
            e
        })
        .ok()?;
        res.map(|settings| settings.into())
    }

    async fn upsert(&self, settings: &ReminderSettings) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO reminder_settings
            (tenant_uid, hearing_lead_minutes, filing_lead_minutes, task_lead_minutes, email_enabled, sms_enabled, whatsapp_enabled)
            VALUES($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (tenant_uid) DO UPDATE SET
                hearing_lead_minutes = $2,
                filing_lead_minutes = $3,
                task_lead_minutes = $4,
                email_enabled = $5,
                sms_enabled = $6,
                whatsapp_enabled = $7
            "#,
        )
        .bind(*settings.tenant_id.inner_ref())
        .bind(settings.hearing_lead_minutes)
        .bind(settings.filing_lead_minutes)
        .bind(settings.task_lead_minutes)
        .bind(settings.email_enabled)
        .bind(settings.sms_enabled)
        .bind(settings.whatsapp_enabled)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to upsert reminder settings: {:?}. DB returned error: {:?}",
                settings, e
            );
            e
        })?;
        Ok(())
    }
}
