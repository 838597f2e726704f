use super::IFilingSourceRepo;
use crate::repos::shared::query_structs::DueWindow;
use lexbase_reminders_domain::{FilingRecord, NotifiableEvent, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use tracing::error;

pub struct PostgresFilingSourceRepo {
    pool: PgPool,
}

impl PostgresFilingSourceRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct FilingRaw {
    filing_uid: Uuid,
    tenant_uid: Uuid,
    title: String,
    due_at: i64,
    case_number: String,
    client_name: String,
    client_email: Option<String>,
    client_phone: Option<String>,
}

impl From<FilingRaw> for FilingRecord {
    fn from(e: FilingRaw) -> Self {
        Self {
            id: e.filing_uid.into(),
            tenant_id: e.tenant_uid.into(),
            case_number: e.case_number,
            title: e.title,
            due_at: e.due_at,
            client_name: e.client_name,
            client_email: e.client_email,
            client_phone: e.client_phone,
        }
    }
}

#[async_trait::async_trait]
impl IFilingSourceRepo for PostgresFilingSourceRepo {
    async fn find_due(
        &self,
        tenant_id: &ID,
        window: DueWindow,
    ) -> anyhow::Result<Vec<NotifiableEvent>> {
        let filings: Vec<FilingRaw> = sqlx::query_as::<_, FilingRaw>(
            r#"
            SELECT f.filing_uid, f.tenant_uid, f.title, f.due_at,
                   c.case_number, cl.name AS client_name,
                   cl.email AS client_email, cl.phone AS client_phone
            FROM filings AS f
            INNER JOIN cases AS c ON c.case_uid = f.case_uid
            INNER JOIN clients AS cl ON cl.client_uid = c.client_uid
            WHERE f.tenant_uid = $1 AND f.due_at >= $2 AND f.due_at <= $3
            ORDER BY f.due_at
            "#,
        )
        .bind(*tenant_id.inner_ref())
        .bind(window.start)
        .bind(window.end)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find due filings for tenant: {} failed. DB returned error: {:?}",
                tenant_id, e
            );
            e
        })?;
        Ok(filings
            .into_iter()
            .map(|f| FilingRecord::from(f).to_notification())
            .collect())
    }
}
