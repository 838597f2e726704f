use super::ITaskDeadlineSourceRepo;
use crate::repos::shared::{inmemory_repo::*, query_structs::DueWindow};
use lexbase_reminders_domain::{NotifiableEvent, TaskRecord, ID};

pub struct InMemoryTaskDeadlineSourceRepo {
    tasks: std::sync::Mutex<Vec<TaskRecord>>,
}

impl InMemoryTaskDeadlineSourceRepo {
    pub fn new() -> Self {
        Self {
            tasks: std::sync::Mutex::new(Vec::new()),
        }
    }

    pub fn push(&self, task: TaskRecord) {
        insert(&task, &self.tasks);
    }
}

#[async_trait::async_trait]
impl ITaskDeadlineSourceRepo for InMemoryTaskDeadlineSourceRepo {
    async fn find_due(
        &self,
        tenant_id: &ID,
        window: DueWindow,
    ) -> anyhow::Result<Vec<NotifiableEvent>> {
        let tasks = find_by(&self.tasks, |t| {
            t.tenant_id == *tenant_id && !t.completed && window.contains(t.due_at)
        });
        Ok(tasks.iter().map(|t| t.to_notification()).collect())
    }
}
