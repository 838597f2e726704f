use super::IFilingSourceRepo;
use crate::repos::shared::{inmemory_repo::*, query_structs::DueWindow};
use lexbase_reminders_domain::{FilingRecord, NotifiableEvent, ID};

pub struct InMemoryFilingSourceRepo {
    filings: std::sync::Mutex<Vec<FilingRecord>>,
}

impl InMemoryFilingSourceRepo {
    pub fn new() -> Self {
        Self {
            filings: std::sync::Mutex::new(Vec::new()),
        }
    }

    pub fn push(&self, filing: FilingRecord) {
        insert(&filing, &self.filings);
    }
}

#[async_trait::async_trait]
impl IFilingSourceRepo for InMemoryFilingSourceRepo {
    async fn find_due(
        &self,
        tenant_id: &ID,
        window: DueWindow,
    ) -> anyhow::Result<Vec<NotifiableEvent>> {
        let filings = find_by(&self.filings, |f| {
            f.tenant_id == *tenant_id && window.contains(f.due_at)
        });
        Ok(filings.iter().map(|f| f.to_notification()).collect())
    }
}
