//! API route configuration.

use axum::Router;
use axum::routing::{delete, get, post, put};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use super::handlers::{self, HealthResponse};
use super::state::AppState;
use super::v1::{
    self, AttachmentResponse, CommentResponse, ErrorResponse, PaginatedTasks, TaskResponse,
    UserResponse,
};
use crate::db::Database;
use crate::service::{AttachmentInput, CommentInput, TaskInput, UserInput};

/// Build routes with generic database type.
///
/// This macro reduces boilerplate when registering handlers that are generic
/// over the Database trait. It applies the turbofish operator automatically.
macro_rules! routes {
    ($D:ty => {
        $($method:ident $path:literal => $($handler:ident)::+),* $(,)?
    }) => {{
        let router = Router::new();
        $(
            let router = router.route($path, $method($($handler)::+::<$D>));
        )*
        router
    }};
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Taskboard API",
        version = "0.1.0",
        description = "Task management backend: tasks, users, comments and attachments",
        license(name = "GPL-2.0")
    ),
    paths(
        handlers::root,
        handlers::health,
        v1::list_tasks,
        v1::get_task,
        v1::create_task,
        v1::update_task,
        v1::delete_task,
        v1::create_user,
        v1::get_user,
        v1::create_comment,
        v1::get_comment,
        v1::list_task_comments,
        v1::delete_comment,
        v1::create_attachment,
        v1::get_attachment,
        v1::list_task_attachments,
        v1::update_attachment,
        v1::delete_attachment,
    ),
    components(
        schemas(
            HealthResponse,
            TaskInput,
            TaskResponse,
            PaginatedTasks,
            UserInput,
            UserResponse,
            CommentInput,
            CommentResponse,
            AttachmentInput,
            AttachmentResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "system", description = "System health and status endpoints"),
        (name = "tasks", description = "Task management endpoints"),
        (name = "users", description = "User registration and lookup"),
        (name = "comments", description = "Comments on tasks"),
        (name = "attachments", description = "File references attached to tasks")
    )
)]
pub struct ApiDoc;

/// Create the API router with OpenAPI documentation
pub fn create_router<D: Database>(state: AppState<D>) -> Router {
    let api = ApiDoc::openapi();

    // System routes (non-generic)
    let system_routes = Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health));

    let task_routes = routes!(D => {
        get "/tasks" => v1::list_tasks,
        post "/tasks" => v1::create_task,
        get "/tasks/{id}" => v1::get_task,
        put "/tasks/{id}" => v1::update_task,
        delete "/tasks/{id}" => v1::delete_task,
        get "/tasks/{id}/comments" => v1::list_task_comments,
        get "/tasks/{id}/attachments" => v1::list_task_attachments,
    });

    let user_routes = routes!(D => {
        post "/users" => v1::create_user,
        get "/users/{id}" => v1::get_user,
    });

    let comment_routes = routes!(D => {
        post "/comments" => v1::create_comment,
        get "/comments/{id}" => v1::get_comment,
        delete "/comments/{id}" => v1::delete_comment,
    });

    let attachment_routes = routes!(D => {
        post "/attachments" => v1::create_attachment,
        get "/attachments/{id}" => v1::get_attachment,
        put "/attachments/{id}" => v1::update_attachment,
        delete "/attachments/{id}" => v1::delete_attachment,
    });

    let v1_routes = task_routes
        .merge(user_routes)
        .merge(comment_routes)
        .merge(attachment_routes);

    system_routes
        .nest("/api/v1", v1_routes)
        .merge(Scalar::with_url("/docs", api))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_lists_every_resource() {
        let doc = ApiDoc::openapi();
        let paths: Vec<_> = doc.paths.paths.keys().cloned().collect();

        for expected in [
            "/health",
            "/api/v1/tasks",
            "/api/v1/tasks/{id}",
            "/api/v1/tasks/{id}/comments",
            "/api/v1/tasks/{id}/attachments",
            "/api/v1/users",
            "/api/v1/users/{id}",
            "/api/v1/comments",
            "/api/v1/comments/{id}",
            "/api/v1/attachments",
            "/api/v1/attachments/{id}",
        ] {
            assert!(
                paths.iter().any(|p| p == expected),
                "missing path {}",
                expected
            );
        }
    }
}
