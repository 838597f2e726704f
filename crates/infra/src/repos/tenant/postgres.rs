use super::ITenantRepo;
use lexbase_reminders_domain::Tenant;
use sqlx::{types::Uuid, FromRow, PgPool};
use tracing::error;

pub struct PostgresTenantRepo {
    pool: PgPool,
}

impl PostgresTenantRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct TenantRaw {
    tenant_uid: Uuid,
    name: String,
}

impl From<TenantRaw> for Tenant {
    fn from(e: TenantRaw) -> Self {
        Self {
            id: e.tenant_uid.into(),
            name: e.name,
        }
    }
}

#[async_trait::async_trait]
impl ITenantRepo for PostgresTenantRepo {
    async fn insert(&self, tenant: &Tenant) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO tenants(tenant_uid, name)
            VALUES($1, $2)
            "#,
        )
        .bind(*tenant.id.inner_ref())
        .bind(tenant.name.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to insert tenant: {:?}. DB returned error: {:?}",
                tenant, e
            );
            e
        })?;
        Ok(())
    }

    async fn all(&self) -> anyhow::Result<Vec<Tenant>> {
        let tenants: Vec<TenantRaw> = sqlx::query_as::<_, TenantRaw>(
            r#"
            SELECT tenant_uid, name FROM tenants
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("Unable to list tenants. DB returned error: {:?}", e);
            e
        })?;
        Ok(tenants.into_iter().map(|t| t.into()).collect())
    }
}
