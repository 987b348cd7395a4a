//! User handlers.

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
use crate::db::{Database, User};
use crate::service::UserInput;

use super::{ErrorResponse, HandlerError, error_response};

/// A user as exposed over HTTP. The password hash never leaves the server.
#[derive(Serialize, ToSchema)]
pub struct UserResponse {
    pub id: Uuid,
    #[schema(example = "ada@example.com")]
    pub email: String,
    #[schema(example = "user")]
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            email: u.email,
            role: u.role.to_string(),
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/users",
    tag = "users",
    request_body = UserInput,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Invalid email, password or role", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, input), fields(email = %input.email))]
pub async fn create_user<D: Database>(
    State(state): State<AppState<D>>,
    Json(input): Json<UserInput>,
) -> Result<(StatusCode, Json<UserResponse>), HandlerError> {
    let user = state
        .users()
        .create_user(input)
        .await
        .map_err(error_response)?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    tag = "users",
    params(("id" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_user<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<String>,
) -> Result<Json<UserResponse>, HandlerError> {
    let user = state.users().get_user(&id).await.map_err(error_response)?;
    Ok(Json(UserResponse::from(user)))
}
