use super::ITaskDeadlineSourceRepo;
use crate::repos::shared::query_structs::DueWindow;
use lexbase_reminders_domain::{NotifiableEvent, TaskRecord, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use tracing::error;

pub struct PostgresTaskDeadlineSourceRepo {
    pool: PgPool,
}

impl PostgresTaskDeadlineSourceRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct TaskRaw {
    task_uid: Uuid,
    tenant_uid: Uuid,
    title: String,
    due_at: i64,
    completed: bool,
    assignee_name: String,
    assignee_email: Option<String>,
    assignee_phone: Option<String>,
}

impl From<TaskRaw> for TaskRecord {
    fn from(e: TaskRaw) -> Self {
        Self {
            id: e.task_uid.into(),
            tenant_id: e.tenant_uid.into(),
            title: e.title,
            due_at: e.due_at,
            completed: e.completed,
            assignee_name: e.assignee_name,
            assignee_email: e.assignee_email,
            assignee_phone: e.assignee_phone,
        }
    }
}

#[async_trait::async_trait]
impl ITaskDeadlineSourceRepo for PostgresTaskDeadlineSourceRepo {
    async fn find_due(
        &self,
        tenant_id: &ID,
        window: DueWindow,
    ) -> anyhow::Result<Vec<NotifiableEvent>> {
        let tasks: Vec<TaskRaw> = sqlx::query_as::<_, TaskRaw>(
            r#"
            SELECT t.task_uid, t.tenant_uid, t.title, t.due_at, t.completed,
                   m.name AS assignee_name, m.email AS assignee_email,
                   m.phone AS assignee_phone
            FROM tasks AS t
            INNER JOIN team_members AS m ON m.member_uid = t.assignee_uid
            WHERE t.tenant_uid = $1 AND t.completed = FALSE
                AND t.due_at >= $2 AND t.due_at <= $3
            ORDER BY t.due_at
            "#,
        )
        .bind(*tenant_id.inner_ref())
        .bind(window.start)
        .bind(window.end)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find due tasks for tenant: {} failed. DB returned error: {:?}",
                tenant_id, e
            );
            e
        })?;
        Ok(tasks
            .into_iter()
            .map(|t| TaskRecord::from(t).to_notification())
            .collect())
    }
}
