use super::IReminderSettingsRepo;
use crate::repos::shared::inmemory_repo::*;
use lexbase_reminders_domain::{ReminderSettings, ID};

pub struct InMemoryReminderSettingsRepo {
    settings: std::sync::Mutex<Vec<ReminderSettings>>,
}

impl InMemoryReminderSettingsRepo {
    pub fn new() -> Self {
        Self {
            settings: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IReminderSettingsRepo for InMemoryReminderSettingsRepo {
    async fn find(&self, tenant_id: &ID) -> Option<ReminderSettings> {
        find_by(&self.settings, |s| s.tenant_id == *tenant_id)
            .into_iter()
            .next()
    }

    async fn upsert(&self, settings: &ReminderSettings) -> anyhow::Result<()> {
        if self.find(&settings.tenant_id).await.is_some() {
            save(settings, &self.settings);
        } else {
            insert(settings, &self.settings);
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[tokio::test]
    async fn get_falls_back_to_defaults() {
        let repo = InMemoryReminderSettingsRepo::new();
        let tenant_id = ID::new();
        assert!(repo.find(&tenant_id).await.is_none());
        let settings = repo.get(&tenant_id).await;
        assert_eq!(settings, ReminderSettings::defaults(tenant_id));
    }

    #[tokio::test]
    async fn upsert_is_insert_or_update() {
        let repo = InMemoryReminderSettingsRepo::new();
        let tenant_id = ID::new();

        let mut settings = ReminderSettings::defaults(tenant_id.clone());
        settings.hearing_lead_minutes = 120;
        repo.upsert(&settings).await.unwrap();
        assert_eq!(repo.get(&tenant_id).await.hearing_lead_minutes, 120);

        settings.hearing_lead_minutes = 30;
        repo.upsert(&settings).await.unwrap();
        let stored = repo.get(&tenant_id).await;
        assert_eq!(stored.hearing_lead_minutes, 30);
        assert!(repo.find(&tenant_id).await.is_some());
    }
}
