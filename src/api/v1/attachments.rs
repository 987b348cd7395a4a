//! Attachment handlers.

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
use crate::db::{Attachment, Database};
use crate::service::AttachmentInput;

use super::{ErrorResponse, HandlerError, error_response};

#[derive(Serialize, ToSchema)]
pub struct AttachmentResponse {
    pub id: Uuid,
    #[schema(example = "design.pdf")]
    pub file_name: String,
    #[schema(example = "s3://taskboard/uploads/design.pdf")]
    pub file_path: String,
    pub uploaded_at: DateTime<Utc>,
    pub task_id: Uuid,
}

impl From<Attachment> for AttachmentResponse {
    fn from(a: Attachment) -> Self {
        Self {
            id: a.id,
            file_name: a.file_name,
            file_path: a.file_path,
            uploaded_at: a.uploaded_at,
            task_id: a.task_id,
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/attachments",
    tag = "attachments",
    request_body = AttachmentInput,
    responses(
        (status = 201, description = "Attachment created", body = AttachmentResponse),
        (status = 400, description = "Invalid input or unknown task", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_attachment<D: Database>(
    State(state): State<AppState<D>>,
    Json(input): Json<AttachmentInput>,
) -> Result<(StatusCode, Json<AttachmentResponse>), HandlerError> {
    let attachment = state
        .attachments()
        .create_attachment(input)
        .await
        .map_err(error_response)?;

    Ok((StatusCode::CREATED, Json(AttachmentResponse::from(attachment))))
}

#[utoipa::path(
    get,
    path = "/api/v1/attachments/{id}",
    tag = "attachments",
    params(("id" = String, Path, description = "Attachment ID")),
    responses(
        (status = 200, description = "Attachment found", body = AttachmentResponse),
        (status = 404, description = "Attachment not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_attachment<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<String>,
) -> Result<Json<AttachmentResponse>, HandlerError> {
    let attachment = state
        .attachments()
        .get_attachment(&id)
        .await
        .map_err(error_response)?;

    Ok(Json(AttachmentResponse::from(attachment)))
}

#[utoipa::path(
    get,
    path = "/api/v1/tasks/{id}/attachments",
    tag = "attachments",
    params(("id" = String, Path, description = "Task ID")),
    responses(
        (status = 200, description = "Attachments on the task", body = Vec<AttachmentResponse>),
        (status = 400, description = "Malformed task ID", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_task_attachments<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<AttachmentResponse>>, HandlerError> {
    let attachments = state
        .attachments()
        .attachments_for_task(&id)
        .await
        .map_err(error_response)?;

    Ok(Json(
        attachments
            .into_iter()
            .map(AttachmentResponse::from)
            .collect(),
    ))
}

/// Rename or move an attachment
///
/// Only `file_name` and `file_path` change; `task_id` in the body is ignored.
#[utoipa::path(
    put,
    path = "/api/v1/attachments/{id}",
    tag = "attachments",
    params(("id" = String, Path, description = "Attachment ID")),
    request_body = AttachmentInput,
    responses(
        (status = 200, description = "Attachment updated", body = AttachmentResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 404, description = "Attachment not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn update_attachment<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<String>,
    Json(input): Json<AttachmentInput>,
) -> Result<Json<AttachmentResponse>, HandlerError> {
    let attachment = state
        .attachments()
        .update_attachment(&id, input)
        .await
        .map_err(error_response)?;

    Ok(Json(AttachmentResponse::from(attachment)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/attachments/{id}",
    tag = "attachments",
    params(("id" = String, Path, description = "Attachment ID")),
    responses(
        (status = 204, description = "Attachment deleted"),
        (status = 400, description = "Malformed attachment ID", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_attachment<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<String>,
) -> Result<StatusCode, HandlerError> {
    state
        .attachments()
        .delete_attachment(&id)
        .await
        .map_err(error_response)?;

    Ok(StatusCode::NO_CONTENT)
}
