use super::INotificationLedgerRepo;
use lexbase_reminders_domain::{Channel, DedupRecord, EventKind, ID};
use sqlx::PgPool;
use tracing::{debug, error};

/// Postgres unique-violation error code
const UNIQUE_VIOLATION: &str = "23505";

pub struct PostgresNotificationLedgerRepo {
    pool: PgPool,
}

impl PostgresNotificationLedgerRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl INotificationLedgerRepo for PostgresNotificationLedgerRepo {
    async fn was_sent(
        &self,
        tenant_id: &ID,
        entity_type: EventKind,
        entity_id: &ID,
        recipient: &str,
        channel: Channel,
    ) -> anyhow::Result<bool> {
        let row: Option<(i64,)> = sqlx::query_as::<_, (i64,)>(
            r#"
            SELECT sent_at FROM notification_ledger
            WHERE tenant_uid = $1 AND entity_type = $2 AND entity_uid = $3
                AND recipient = $4 AND channel = $5
            "#,
        )
        .bind(*tenant_id.inner_ref())
        .bind(entity_type.as_str())
        .bind(*entity_id.inner_ref())
        .bind(recipient)
        .bind(channel.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Notification ledger lookup for tenant: {} failed. DB returned error: {:?}",
                tenant_id, e
            );
            e
        })?;
        Ok(row.is_some())
    }

    async fn record_sent(&self, record: &DedupRecord) -> anyhow::Result<()> {
        let res = sqlx::query(
            r#"
            INSERT INTO notification_ledger
            (tenant_uid, entity_type, entity_uid, recipient, channel, sent_at)
            VALUES($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(*record.tenant_id.inner_ref())
        .bind(record.entity_type.as_str())
        .bind(*record.entity_id.inner_ref())
        .bind(record.recipient.as_str())
        .bind(record.channel.as_str())
        .bind(record.sent_at)
        .execute(&self.pool)
        .await;

        match res {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(e)) if e.code().as_deref() == Some(UNIQUE_VIOLATION) => {
                debug!("Notification ledger already contains: {:?}", record);
                Ok(())
            }
            Err(e) => {
                error!(
                    "Unable to insert notification ledger record: {:?}. DB returned error: {:?}",
                    record, e
                );
                Err(e.into())
            }
        }
    }
}
