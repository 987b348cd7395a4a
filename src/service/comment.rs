//! Comment service.

use std::sync::Arc;

use serde::Deserialize;
use tracing::instrument;
use utoipa::ToSchema;

use super::{ServiceError, ServiceResult};
use crate::db::utils::{current_timestamp, generate_entity_id, parse_entity_id};
use crate::db::{Comment, CommentRepository, Database, Repository};

/// Client-supplied comment fields.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CommentInput {
    #[schema(example = "Looks good to me")]
    pub content: String,
    pub task_id: String,
    pub user_id: String,
}

/// Business operations on comments.
pub struct CommentService<D: Database> {
    db: Arc<D>,
}

impl<D: Database> Clone for CommentService<D> {
    fn clone(&self) -> Self {
        Self {
            db: Arc::clone(&self.db),
        }
    }
}

impl<D: Database> CommentService<D> {
    pub fn new(db: Arc<D>) -> Self {
        Self { db }
    }

    #[instrument(skip(self, input))]
    pub async fn create_comment(&self, input: CommentInput) -> ServiceResult<Comment> {
        if input.content.trim().is_empty() {
            return Err(ServiceError::validation("content must not be empty"));
        }

        let comment = Comment {
            id: generate_entity_id(),
            content: input.content,
            created_at: current_timestamp(),
            task_id: parse_entity_id("Task", &input.task_id)?,
            user_id: parse_entity_id("User", &input.user_id)?,
        };

        self.db.comments().create(&comment).await?;
        Ok(comment)
    }

    pub async fn get_comment(&self, id: &str) -> ServiceResult<Comment> {
        Ok(self.db.comments().get_by_id(id).await?)
    }

    /// Every comment on a task, oldest first.
    pub async fn comments_for_task(&self, task_id: &str) -> ServiceResult<Vec<Comment>> {
        Ok(self.db.comments().get_by_task_id(task_id).await?)
    }

    #[instrument(skip(self))]
    pub async fn delete_comment(&self, id: &str) -> ServiceResult<()> {
        Ok(self.db.comments().delete(id).await?)
    }
}
