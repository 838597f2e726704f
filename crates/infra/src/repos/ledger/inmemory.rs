use super::INotificationLedgerRepo;
use crate::repos::shared::inmemory_repo::*;
use lexbase_reminders_domain::{Channel, DedupRecord, EventKind, ID};
use tracing::debug;

pub struct InMemoryNotificationLedgerRepo {
    records: std::sync::Mutex<Vec<DedupRecord>>,
}

impl InMemoryNotificationLedgerRepo {
    pub fn new() -> Self {
        Self {
            records: std::sync::Mutex::new(Vec::new()),
        }
    }

    pub fn all(&self) -> Vec<DedupRecord> {
        find_by(&self.records, |_| true)
    }
}

#[async_trait::async_trait]
impl INotificationLedgerRepo for InMemoryNotificationLedgerRepo {
    async fn was_sent(
        &self,
        tenant_id: &ID,
        entity_type: EventKind,
        entity_id: &ID,
        recipient: &str,
        channel: Channel,
    ) -> anyhow::Result<bool> {
        let matches = find_by(&self.records, |r| {
            r.tenant_id == *tenant_id
                && r.entity_type == entity_type
                && r.entity_id == *entity_id
                && r.recipient == recipient
                && r.channel == channel
        });
        Ok(!matches.is_empty())
    }

    async fn record_sent(&self, record: &DedupRecord) -> anyhow::Result<()> {
        let mut records = self.records.lock().unwrap();
        if records.iter().any(|r| r.same_key(record)) {
            debug!("Notification ledger already contains: {:?}", record);
            return Ok(());
        }
        records.push(record.clone());
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn record() -> DedupRecord {
        DedupRecord::new(
            ID::new(),
            EventKind::Hearing,
            ID::new(),
            "ada@example.com".into(),
            Channel::Email,
            100,
        )
    }

    #[tokio::test]
    async fn duplicate_record_sent_is_not_an_error() {
        let repo = InMemoryNotificationLedgerRepo::new();
        let record = record();

        assert!(repo.record_sent(&record).await.is_ok());
        assert!(repo.record_sent(&record).await.is_ok());
        assert_eq!(repo.all().len(), 1);
    }

    #[tokio::test]
    async fn was_sent_matches_the_full_key() {
        let repo = InMemoryNotificationLedgerRepo::new();
        let record = record();
        repo.record_sent(&record).await.unwrap();

        assert!(repo
            .was_sent(
                &record.tenant_id,
                record.entity_type,
                &record.entity_id,
                &record.recipient,
                record.channel,
            )
            .await
            .unwrap());
        // Same entity, different channel
        assert!(!repo
            .was_sent(
                &record.tenant_id,
                record.entity_type,
                &record.entity_id,
                &record.recipient,
                Channel::Sms,
            )
            .await
            .unwrap());
    }
}
