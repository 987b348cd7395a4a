//! Application state for the API server.

use std::sync::Arc;

use crate::db::Database;
use crate::service::{AttachmentService, CommentService, TaskService, UserService};

/// Shared application state.
///
/// Generic over `D: Database`; every service shares one `Arc<D>`.
pub struct AppState<D: Database> {
    tasks: TaskService<D>,
    users: UserService<D>,
    comments: CommentService<D>,
    attachments: AttachmentService<D>,
}

// Manual Clone impl - only the services' Arcs are cloned, not D
impl<D: Database> Clone for AppState<D> {
    fn clone(&self) -> Self {
        Self {
            tasks: self.tasks.clone(),
            users: self.users.clone(),
            comments: self.comments.clone(),
            attachments: self.attachments.clone(),
        }
    }
}

impl<D: Database> AppState<D> {
    pub fn new(db: D) -> Self {
        let db = Arc::new(db);
        Self {
            tasks: TaskService::new(Arc::clone(&db)),
            users: UserService::new(Arc::clone(&db)),
            comments: CommentService::new(Arc::clone(&db)),
            attachments: AttachmentService::new(db),
        }
    }

    pub fn tasks(&self) -> &TaskService<D> {
        &self.tasks
    }

    pub fn users(&self) -> &UserService<D> {
        &self.users
    }

    pub fn comments(&self) -> &CommentService<D> {
        &self.comments
    }

    pub fn attachments(&self) -> &AttachmentService<D> {
        &self.attachments
    }
}
