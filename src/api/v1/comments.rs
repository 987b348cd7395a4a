//! Comment handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::instrument;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::AppState;
use crate::db::{Comment, Database};
use crate::service::CommentInput;

use super::{ErrorResponse, HandlerError, error_response};

#[derive(Serialize, ToSchema)]
pub struct CommentResponse {
    pub id: Uuid,
    #[schema(example = "Looks good to me")]
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub task_id: Uuid,
    pub user_id: Uuid,
}

impl From<Comment> for CommentResponse {
    fn from(c: Comment) -> Self {
        Self {
            id: c.id,
            content: c.content,
            created_at: c.created_at,
            task_id: c.task_id,
            user_id: c.user_id,
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/comments",
    tag = "comments",
    request_body = CommentInput,
    responses(
        (status = 201, description = "Comment created", body = CommentResponse),
        (status = 400, description = "Invalid input or unknown task/user", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_comment<D: Database>(
    State(state): State<AppState<D>>,
    Json(input): Json<CommentInput>,
) -> Result<(StatusCode, Json<CommentResponse>), HandlerError> {
    let comment = state
        .comments()
        .create_comment(input)
        .await
        .map_err(error_response)?;

    Ok((StatusCode::CREATED, Json(CommentResponse::from(comment))))
}

#[utoipa::path(
    get,
    path = "/api/v1/comments/{id}",
    tag = "comments",
    params(("id" = String, Path, description = "Comment ID")),
    responses(
        (status = 200, description = "Comment found", body = CommentResponse),
        (status = 404, description = "Comment not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_comment<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<String>,
) -> Result<Json<CommentResponse>, HandlerError> {
    let comment = state
        .comments()
        .get_comment(&id)
        .await
        .map_err(error_response)?;

    Ok(Json(CommentResponse::from(comment)))
}

#[utoipa::path(
    get,
    path = "/api/v1/tasks/{id}/comments",
    tag = "comments",
    params(("id" = String, Path, description = "Task ID")),
    responses(
        (status = 200, description = "Comments on the task, oldest first", body = Vec<CommentResponse>),
        (status = 400, description = "Malformed task ID", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_task_comments<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<CommentResponse>>, HandlerError> {
    let comments = state
        .comments()
        .comments_for_task(&id)
        .await
        .map_err(error_response)?;

    Ok(Json(
        comments.into_iter().map(CommentResponse::from).collect(),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/v1/comments/{id}",
    tag = "comments",
    params(("id" = String, Path, description = "Comment ID")),
    responses(
        (status = 204, description = "Comment deleted"),
        (status = 400, description = "Malformed comment ID", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_comment<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<String>,
) -> Result<StatusCode, HandlerError> {
    state
        .comments()
        .delete_comment(&id)
        .await
        .map_err(error_response)?;

    Ok(StatusCode::NO_CONTENT)
}
