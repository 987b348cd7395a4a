//! SQLite TaskRepository implementation.

use sqlx::SqlitePool;
use sqlx::sqlite::SqliteRow;
use tracing::debug;
use uuid::Uuid;

use super::base::{SqliteEntity, SqliteQuery, SqliteRepository};
use super::error::map_sqlx_error;
use super::helpers::{FilterValue, column, contains_pattern, id_column};
use crate::db::utils::parse_entity_id;
use crate::db::{Attachment, Comment, DbResult, Page, Repository, Task, TaskRepository};

impl SqliteEntity for Task {
    const TABLE: &'static str = "tasks";
    const ENTITY_TYPE: &'static str = "Task";
    const COLUMNS: &'static [&'static str] = &[
        "title",
        "description",
        "status",
        "priority",
        "due_date",
        "created_at",
        "updated_at",
        "user_id",
        "search_text",
    ];

    fn id(&self) -> Uuid {
        self.id
    }

    fn bind_columns<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(&self.title)
            .bind(&self.description)
            .bind(&self.status)
            .bind(self.priority)
            .bind(self.due_date)
            .bind(self.created_at)
            .bind(self.updated_at)
            .bind(self.user_id.to_string())
            .bind(search_text(self))
    }

    fn from_row(row: &SqliteRow) -> DbResult<Self> {
        Ok(Task {
            id: id_column(row, "id")?,
            title: column(row, "title")?,
            description: column(row, "description")?,
            status: column(row, "status")?,
            priority: column(row, "priority")?,
            due_date: column(row, "due_date")?,
            created_at: column(row, "created_at")?,
            updated_at: column(row, "updated_at")?,
            user_id: id_column(row, "user_id")?,
            comments: Vec::new(),
            attachments: Vec::new(),
        })
    }
}

/// Lowercased title and description matched by [`TaskRepository::search`].
///
/// SQLite's `LOWER` only folds ASCII, so folding happens here with full
/// Unicode case mapping and the query is folded the same way.
fn search_text(task: &Task) -> String {
    format!("{}\n{}", task.title, task.description).to_lowercase()
}

/// SQLx-backed task repository.
///
/// Single-task lookups load the task's comments and attachments; deletes
/// remove them together with the task in one transaction.
pub struct SqliteTaskRepository<'a> {
    base: SqliteRepository<'a, Task>,
}

impl<'a> SqliteTaskRepository<'a> {
    pub(crate) fn new(pool: &'a SqlitePool) -> Self {
        Self {
            base: SqliteRepository::new(pool),
        }
    }
}

impl Repository<Task> for SqliteTaskRepository<'_> {
    async fn create(&self, task: &Task) -> DbResult<()> {
        self.base.create(task).await
    }

    async fn get_by_id(&self, id: &str) -> DbResult<Task> {
        let mut task = self.base.get_by_id(id).await?;

        let by_task = Some("task_id = ?");
        task.comments = SqliteRepository::<Comment>::new(self.base.pool())
            .find_where(by_task, vec![FilterValue::from(task.id)], None)
            .await?;
        task.attachments = SqliteRepository::<Attachment>::new(self.base.pool())
            .find_where(by_task, vec![FilterValue::from(task.id)], None)
            .await?;

        Ok(task)
    }

    async fn update(&self, task: &Task) -> DbResult<()> {
        self.base.update(task).await
    }

    /// Delete a task with its comments and attachments.
    async fn delete(&self, id: &str) -> DbResult<()> {
        let uuid = parse_entity_id(Task::ENTITY_TYPE, id)?;
        let task_id = uuid.to_string();
        let map_err = |e| map_sqlx_error(e, Task::ENTITY_TYPE);

        let mut tx = self.base.pool().begin().await.map_err(map_err)?;

        let comments = sqlx::query("DELETE FROM comments WHERE task_id = ?")
            .bind(&task_id)
            .execute(&mut *tx)
            .await
            .map_err(map_err)?;
        let attachments = sqlx::query("DELETE FROM attachments WHERE task_id = ?")
            .bind(&task_id)
            .execute(&mut *tx)
            .await
            .map_err(map_err)?;
        sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(&task_id)
            .execute(&mut *tx)
            .await
            .map_err(map_err)?;

        tx.commit().await.map_err(map_err)?;

        debug!(
            id = %uuid,
            comments = comments.rows_affected(),
            attachments = attachments.rows_affected(),
            "deleted task with dependents"
        );
        Ok(())
    }

    async fn list(&self, page: Page) -> DbResult<Vec<Task>> {
        self.base.list(page).await
    }
}

impl TaskRepository for SqliteTaskRepository<'_> {
    async fn get_by_user_id(&self, user_id: &str, page: Page) -> DbResult<Vec<Task>> {
        let user_id = parse_entity_id("User", user_id)?;
        self.base
            .find_where(Some("user_id = ?"), vec![FilterValue::from(user_id)], Some(page))
            .await
    }

    async fn get_by_status(&self, status: &str, page: Page) -> DbResult<Vec<Task>> {
        self.base
            .find_where(
                Some("status = ?"),
                vec![FilterValue::Text(status.to_string())],
                Some(page),
            )
            .await
    }

    async fn get_by_priority(&self, priority: i32, page: Page) -> DbResult<Vec<Task>> {
        self.base
            .find_where(
                Some("priority = ?"),
                vec![FilterValue::Integer(i64::from(priority))],
                Some(page),
            )
            .await
    }

    async fn get_all(&self, page: Page) -> DbResult<Vec<Task>> {
        self.base.list(page).await
    }

    async fn search(&self, query: &str, page: Page) -> DbResult<Vec<Task>> {
        let pattern = contains_pattern(&query.to_lowercase());
        self.base
            .find_where(
                Some(r"search_text LIKE ? ESCAPE '\'"),
                vec![FilterValue::Text(pattern)],
                Some(page),
            )
            .await
    }
}
