use super::IHearingSourceRepo;
use crate::repos::shared::{inmemory_repo::*, query_structs::DueWindow};
use lexbase_reminders_domain::{HearingRecord, NotifiableEvent, ID};

pub struct InMemoryHearingSourceRepo {
    hearings: std::sync::Mutex<Vec<HearingRecord>>,
    // Lets tests simulate a tenant-scoped query failure
    failing_tenants: std::sync::Mutex<Vec<ID>>,
}

impl InMemoryHearingSourceRepo {
    pub fn new() -> Self {
        Self {
            hearings: std::sync::Mutex::new(Vec::new()),
            failing_tenants: std::sync::Mutex::new(Vec::new()),
        }
    }

    pub fn push(&self, hearing: HearingRecord) {
        insert(&hearing, &self.hearings);
    }

    pub fn fail_for(&self, tenant_id: ID) {
        self.failing_tenants.lock().unwrap().push(tenant_id);
    }
}

#[async_trait::async_trait]
impl IHearingSourceRepo for InMemoryHearingSourceRepo {
    async fn find_due(
        &self,
        tenant_id: &ID,
        window: DueWindow,
    ) -> anyhow::Result<Vec<NotifiableEvent>> {
        if self.failing_tenants.lock().unwrap().contains(tenant_id) {
            return Err(anyhow::anyhow!(
                "Hearing query failed for tenant: {}",
                tenant_id
            ));
        }
        let hearings = find_by(&self.hearings, |h| {
            h.tenant_id == *tenant_id && window.contains(h.starts_at)
        });
        Ok(hearings.iter().map(|h| h.to_notification()).collect())
    }
}
