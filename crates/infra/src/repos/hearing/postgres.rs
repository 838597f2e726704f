use super::IHearingSourceRepo;
use crate::repos::shared::query_structs::DueWindow;
use lexbase_reminders_domain::{HearingRecord, NotifiableEvent, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use tracing::error;

pub struct PostgresHearingSourceRepo {
    pool: PgPool,
}

impl PostgresHearingSourceRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct HearingRaw {
    hearing_uid: Uuid,
    tenant_uid: Uuid,
    title: String,
    starts_at: i64,
    case_number: String,
    client_name: String,
    client_email: Option<String>,
    client_phone: Option<String>,
}

impl From<HearingRaw> for HearingRecord {
    fn from(e: HearingRaw) -> Self {
        Self {
            id: e.hearing_uid.into(),
            tenant_id: e.tenant_uid.into(),
            case_number: e.case_number,
            title: e.title,
            starts_at: e.starts_at,
            client_name: e.client_name,
            client_email: e.client_email,
            client_phone: e.client_phone,
        }
    }
}

#[async_trait::async_trait]
impl IHearingSourceRepo for PostgresHearingSourceRepo {
    async fn find_due(
        &self,
        tenant_id: &ID,
        window: DueWindow,
    ) -> anyhow::Result<Vec<NotifiableEvent>> {
        let hearings: Vec<HearingRaw> = sqlx::query_as::<_, HearingRaw>(
            r#"
            SELECT h.hearing_uid, h.tenant_uid, h.title, h.starts_at,
                   c.case_number, cl.name AS client_name,
                   cl.email AS client_email, cl.phone AS client_phone
            FROM hearings AS h
            INNER JOIN cases AS c ON c.case_uid = h.case_uid
            INNER JOIN clients AS cl ON cl.client_uid = c.client_uid
            WHERE h.tenant_uid = $1 AND h.starts_at >= $2 AND h.starts_at <= $3
            ORDER BY h.starts_at
            "#,
        )
        .bind(*tenant_id.inner_ref())
        .bind(window.start)
        .bind(window.end)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find due hearings for tenant: {} failed. DB returned error: {:?}",
                tenant_id, e
            );
            e
        })?;
        Ok(hearings
            .into_iter()
            .map(|h| HearingRecord::from(h).to_notification())
            .collect())
    }
}
