use super::IKycRenewalSourceRepo;
use crate::repos::shared::query_structs::DueWindow;
use lexbase_reminders_domain::{KycRecord, NotifiableEvent, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use tracing::error;

pub struct PostgresKycRenewalSourceRepo {
    pool: PgPool,
}

impl PostgresKycRenewalSourceRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct KycDocumentRaw {
    document_uid: Uuid,
    tenant_uid: Uuid,
    document_kind: String,
    renewal_reminder_at: i64,
    is_verified: bool,
    client_name: String,
    client_email: Option<String>,
    client_phone: Option<String>,
}

impl From<KycDocumentRaw> for KycRecord {
    fn from(e: KycDocumentRaw) -> Self {
        Self {
            id: e.document_uid.into(),
            tenant_id: e.tenant_uid.into(),
            document_kind: e.document_kind,
            renewal_reminder_at: e.renewal_reminder_at,
            is_verified: e.is_verified,
            client_name: e.client_name,
            client_email: e.client_email,
            client_phone: e.client_phone,
        }
    }
}

#[async_trait::async_trait]
impl IKycRenewalSourceRepo for PostgresKycRenewalSourceRepo {
    async fn find_due(
        &self,
        tenant_id: &ID,
        window: DueWindow,
    ) -> anyhow::Result<Vec<NotifiableEvent>> {
        let documents: Vec<KycDocumentRaw> = sqlx::query_as::<_, KycDocumentRaw>(
            r#"
            SELECT k.document_uid, k.tenant_uid, k.document_kind,
                   k.renewal_reminder_at, k.is_verified,
                   cl.name AS client_name, cl.email AS client_email,
                   cl.phone AS client_phone
            FROM kyc_documents AS k
            INNER JOIN clients AS cl ON cl.client_uid = k.client_uid
            WHERE k.tenant_uid = $1 AND k.is_verified = TRUE
                AND k.renewal_reminder_at >= $2 AND k.renewal_reminder_at <= $3
            ORDER BY k.renewal_reminder_at
            "#,
        )
        .bind(*tenant_id.inner_ref())
        .bind(window.start)
        .bind(window.end)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find due KYC renewals for tenant: {} failed. DB returned error: {:?}",
                tenant_id, e
            );
            e
        })?;
        Ok(documents
            .into_iter()
            .map(|d| KycRecord::from(d).to_notification())
            .collect())
    }
}
