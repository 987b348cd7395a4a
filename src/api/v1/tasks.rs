//! Task management handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::api::AppState;
use crate::db::{Database, Page, Task};
use crate::service::{ServiceError, TaskInput};

use super::{
    AttachmentResponse, CommentResponse, ErrorResponse, HandlerError, error_response, lenient_i64,
};

// =============================================================================
// DTOs
// =============================================================================

#[derive(Serialize, ToSchema)]
pub struct TaskResponse {
    pub id: Uuid,
    #[schema(example = "Write the release notes")]
    pub title: String,
    pub description: String,
    #[schema(example = "in progress")]
    pub status: String,
    #[schema(example = 1)]
    pub priority: i32,
    pub due_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user_id: Uuid,
    /// Filled for single-task lookups, empty in lists
    pub comments: Vec<CommentResponse>,
    /// Filled for single-task lookups, empty in lists
    pub attachments: Vec<AttachmentResponse>,
}

impl From<Task> for TaskResponse {
    fn from(t: Task) -> Self {
        Self {
            id: t.id,
            title: t.title,
            description: t.description,
            status: t.status,
            priority: t.priority,
            due_date: t.due_date,
            created_at: t.created_at,
            updated_at: t.updated_at,
            user_id: t.user_id,
            comments: t.comments.into_iter().map(CommentResponse::from).collect(),
            attachments: t
                .attachments
                .into_iter()
                .map(AttachmentResponse::from)
                .collect(),
        }
    }
}

/// Query parameters for listing tasks.
///
/// At most one filter applies, in this order: `q`, `status`, `priority`,
/// `user_id`.
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListTasksQuery {
    /// Case-insensitive text searched in title and description
    #[param(example = "release")]
    pub q: Option<String>,
    /// Exact status match
    #[param(example = "todo")]
    pub status: Option<String>,
    /// Exact priority match
    #[param(example = 1)]
    pub priority: Option<String>,
    /// Tasks owned by this user
    pub user_id: Option<String>,
    /// Maximum number of items to return (default 10)
    #[param(example = 10)]
    pub limit: Option<String>,
    /// Number of items to skip
    #[param(example = 0)]
    pub offset: Option<String>,
}

impl ListTasksQuery {
    fn page(&self) -> Page {
        Page::from_params(
            lenient_i64(self.offset.as_deref()),
            lenient_i64(self.limit.as_deref()),
        )
    }
}

#[derive(Serialize, ToSchema)]
pub struct PaginatedTasks {
    pub items: Vec<TaskResponse>,
    pub limit: i64,
    pub offset: i64,
}

// =============================================================================
// Handlers
// =============================================================================

#[utoipa::path(
    get,
    path = "/api/v1/tasks",
    tag = "tasks",
    params(ListTasksQuery),
    responses(
        (status = 200, description = "Paginated list of tasks", body = PaginatedTasks),
        (status = 400, description = "Invalid filter", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_tasks<D: Database>(
    State(state): State<AppState<D>>,
    Query(query): Query<ListTasksQuery>,
) -> Result<Json<PaginatedTasks>, HandlerError> {
    let page = query.page();
    let tasks = state.tasks();

    let result = if let Some(q) = query.q.as_deref() {
        tasks.search_tasks(q, page).await
    } else if let Some(status) = query.status.as_deref() {
        tasks.tasks_by_status(status, page).await
    } else if let Some(priority) = query.priority.as_deref() {
        let priority = priority.trim().parse::<i32>().map_err(|_| {
            error_response(ServiceError::validation(format!(
                "priority must be an integer, got '{}'",
                priority
            )))
        })?;
        tasks.tasks_by_priority(priority, page).await
    } else if let Some(user_id) = query.user_id.as_deref() {
        tasks.tasks_by_user(user_id, page).await
    } else {
        tasks.list_tasks(page).await
    };

    let items = result
        .map_err(error_response)?
        .into_iter()
        .map(TaskResponse::from)
        .collect();

    Ok(Json(PaginatedTasks {
        items,
        limit: page.limit(),
        offset: page.offset(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/v1/tasks/{id}",
    tag = "tasks",
    params(("id" = String, Path, description = "Task ID")),
    responses(
        (status = 200, description = "Task with comments and attachments", body = TaskResponse),
        (status = 400, description = "Malformed task ID", body = ErrorResponse),
        (status = 404, description = "Task not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_task<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<String>,
) -> Result<Json<TaskResponse>, HandlerError> {
    let task = state.tasks().get_task(&id).await.map_err(error_response)?;
    Ok(Json(TaskResponse::from(task)))
}

#[utoipa::path(
    post,
    path = "/api/v1/tasks",
    tag = "tasks",
    request_body = TaskInput,
    responses(
        (status = 201, description = "Task created", body = TaskResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_task<D: Database>(
    State(state): State<AppState<D>>,
    Json(input): Json<TaskInput>,
) -> Result<(StatusCode, Json<TaskResponse>), HandlerError> {
    let task = state
        .tasks()
        .create_task(input)
        .await
        .map_err(error_response)?;

    Ok((StatusCode::CREATED, Json(TaskResponse::from(task))))
}

#[utoipa::path(
    put,
    path = "/api/v1/tasks/{id}",
    tag = "tasks",
    params(("id" = String, Path, description = "Task ID")),
    request_body = TaskInput,
    responses(
        (status = 200, description = "Task updated", body = TaskResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 404, description = "Task not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn update_task<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<String>,
    Json(input): Json<TaskInput>,
) -> Result<Json<TaskResponse>, HandlerError> {
    let task = state
        .tasks()
        .update_task(&id, input)
        .await
        .map_err(error_response)?;

    Ok(Json(TaskResponse::from(task)))
}

/// Delete a task with its comments and attachments
#[utoipa::path(
    delete,
    path = "/api/v1/tasks/{id}",
    tag = "tasks",
    params(("id" = String, Path, description = "Task ID")),
    responses(
        (status = 204, description = "Task deleted"),
        (status = 400, description = "Malformed task ID", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_task<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<String>,
) -> Result<StatusCode, HandlerError> {
    state
        .tasks()
        .delete_task(&id)
        .await
        .map_err(error_response)?;

    Ok(StatusCode::NO_CONTENT)
}
