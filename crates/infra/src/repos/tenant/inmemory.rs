use super::ITenantRepo;
use crate::repos::shared::inmemory_repo::*;
use lexbase_reminders_domain::Tenant;

pub struct InMemoryTenantRepo {
    tenants: std::sync::Mutex<Vec<Tenant>>,
}

impl InMemoryTenantRepo {
    pub fn new() -> Self {
        Self {
            tenants: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl ITenantRepo for InMemoryTenantRepo {
    async fn insert(&self, tenant: &Tenant) -> anyhow::Result<()> {
        insert(tenant, &self.tenants);
        Ok(())
    }

    async fn all(&self) -> anyhow::Result<Vec<Tenant>> {
        Ok(find_by(&self.tenants, |_| true))
    }
}
