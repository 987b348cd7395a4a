//! Task service.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::{debug, instrument};
use utoipa::ToSchema;

use super::{ServiceError, ServiceResult};
use crate::db::utils::{current_timestamp, generate_entity_id, parse_entity_id};
use crate::db::{Database, Page, Repository, Task, TaskRepository};

fn default_status() -> String {
    "todo".to_string()
}

/// Client-supplied task fields.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct TaskInput {
    #[schema(example = "Write the release notes")]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Free-form; defaults to `todo`.
    #[schema(example = "todo")]
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    #[schema(example = 1)]
    pub priority: i32,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    /// Owning user.
    #[schema(example = "3f2b8f0e-6a1c-4d52-9a43-0d6c1f1b7e10")]
    pub user_id: String,
}

impl TaskInput {
    fn validate(&self) -> ServiceResult<()> {
        if self.title.trim().is_empty() {
            return Err(ServiceError::validation("title must not be empty"));
        }
        Ok(())
    }
}

/// Business operations on tasks.
pub struct TaskService<D: Database> {
    db: Arc<D>,
}

impl<D: Database> Clone for TaskService<D> {
    fn clone(&self) -> Self {
        Self {
            db: Arc::clone(&self.db),
        }
    }
}

impl<D: Database> TaskService<D> {
    pub fn new(db: Arc<D>) -> Self {
        Self { db }
    }

    #[instrument(skip(self, input), fields(title = %input.title))]
    pub async fn create_task(&self, input: TaskInput) -> ServiceResult<Task> {
        input.validate()?;
        let user_id = parse_entity_id("User", &input.user_id)?;
        let now = current_timestamp();

        let task = Task {
            id: generate_entity_id(),
            title: input.title,
            description: input.description,
            status: input.status,
            priority: input.priority,
            due_date: input.due_date,
            created_at: now,
            updated_at: now,
            user_id,
            comments: Vec::new(),
            attachments: Vec::new(),
        };

        self.db.tasks().create(&task).await?;
        Ok(task)
    }

    /// Fetch a task together with its comments and attachments.
    pub async fn get_task(&self, id: &str) -> ServiceResult<Task> {
        Ok(self.db.tasks().get_by_id(id).await?)
    }

    /// Replace every client field of an existing task.
    ///
    /// The identifier and creation time are kept; `updated_at` moves to now.
    #[instrument(skip(self, input))]
    pub async fn update_task(&self, id: &str, input: TaskInput) -> ServiceResult<Task> {
        input.validate()?;
        let user_id = parse_entity_id("User", &input.user_id)?;
        let tasks = self.db.tasks();
        let mut task = tasks.get_by_id(id).await?;

        task.title = input.title;
        task.description = input.description;
        task.status = input.status;
        task.priority = input.priority;
        task.due_date = input.due_date;
        task.user_id = user_id;
        task.updated_at = current_timestamp();

        tasks.update(&task).await?;
        debug!(id = %task.id, status = %task.status, "task updated");
        Ok(task)
    }

    /// Delete a task with its comments and attachments.
    #[instrument(skip(self))]
    pub async fn delete_task(&self, id: &str) -> ServiceResult<()> {
        Ok(self.db.tasks().delete(id).await?)
    }

    pub async fn list_tasks(&self, page: Page) -> ServiceResult<Vec<Task>> {
        Ok(self.db.tasks().get_all(page).await?)
    }

    pub async fn tasks_by_user(&self, user_id: &str, page: Page) -> ServiceResult<Vec<Task>> {
        Ok(self.db.tasks().get_by_user_id(user_id, page).await?)
    }

    pub async fn tasks_by_status(&self, status: &str, page: Page) -> ServiceResult<Vec<Task>> {
        Ok(self.db.tasks().get_by_status(status, page).await?)
    }

    pub async fn tasks_by_priority(&self, priority: i32, page: Page) -> ServiceResult<Vec<Task>> {
        Ok(self.db.tasks().get_by_priority(priority, page).await?)
    }

    /// Case-insensitive substring search over title and description.
    #[instrument(skip(self))]
    pub async fn search_tasks(&self, query: &str, page: Page) -> ServiceResult<Vec<Task>> {
        Ok(self.db.tasks().search(query, page).await?)
    }
}
