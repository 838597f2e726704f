use super::IKycRenewalSourceRepo;
use crate::repos::shared::{inmemory_repo::*, query_structs::DueWindow};
use lexbase_reminders_domain::{KycRecord, NotifiableEvent, ID};

pub struct InMemoryKycRenewalSourceRepo {
    documents: std::sync::Mutex<Vec<KycRecord>>,
}

impl InMemoryKycRenewalSourceRepo {
    pub fn new() -> Self {
        Self {
            documents: std::sync::Mutex::new(Vec::new()),
        }
    }

    pub fn push(&self, document: KycRecord) {
        insert(&document, &self.documents);
    }
}

#[async_trait::async_trait]
impl IKycRenewalSourceRepo for InMemoryKycRenewalSourceRepo {
    async fn find_due(
        &self,
        tenant_id: &ID,
        window: DueWindow,
    ) -> anyhow::Result<Vec<NotifiableEvent>> {
        let documents = find_by(&self.documents, |d| {
            d.tenant_id == *tenant_id && d.is_verified && window.contains(d.renewal_reminder_at)
        });
        Ok(documents.iter().map(|d| d.to_notification()).collect())
    }
}
