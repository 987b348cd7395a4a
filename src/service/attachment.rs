//! Attachment service.

use std::sync::Arc;

use serde::Deserialize;
use tracing::instrument;
use utoipa::ToSchema;

use super::{ServiceError, ServiceResult};
use crate::db::utils::{current_timestamp, generate_entity_id, parse_entity_id};
use crate::db::{Attachment, AttachmentRepository, Database, Repository};

/// Client-supplied attachment fields.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AttachmentInput {
    #[schema(example = "design.pdf")]
    pub file_name: String,
    /// Object-store URL or filesystem path.
    #[schema(example = "s3://taskboard/uploads/design.pdf")]
    pub file_path: String,
    pub task_id: String,
}

impl AttachmentInput {
    fn validate(&self) -> ServiceResult<()> {
        if self.file_name.trim().is_empty() {
            return Err(ServiceError::validation("file_name must not be empty"));
        }
        if self.file_path.trim().is_empty() {
            return Err(ServiceError::validation("file_path must not be empty"));
        }
        Ok(())
    }
}

/// Business operations on attachments.
pub struct AttachmentService<D: Database> {
    db: Arc<D>,
}

impl<D: Database> Clone for AttachmentService<D> {
    fn clone(&self) -> Self {
        Self {
            db: Arc::clone(&self.db),
        }
    }
}

impl<D: Database> AttachmentService<D> {
    pub fn new(db: Arc<D>) -> Self {
        Self { db }
    }

    #[instrument(skip(self, input), fields(file_name = %input.file_name))]
    pub async fn create_attachment(&self, input: AttachmentInput) -> ServiceResult<Attachment> {
        input.validate()?;

        let attachment = Attachment {
            id: generate_entity_id(),
            file_name: input.file_name,
            file_path: input.file_path,
            uploaded_at: current_timestamp(),
            task_id: parse_entity_id("Task", &input.task_id)?,
        };

        self.db.attachments().create(&attachment).await?;
        Ok(attachment)
    }

    pub async fn get_attachment(&self, id: &str) -> ServiceResult<Attachment> {
        Ok(self.db.attachments().get_by_id(id).await?)
    }

    pub async fn attachments_for_task(&self, task_id: &str) -> ServiceResult<Vec<Attachment>> {
        Ok(self.db.attachments().get_by_task_id(task_id).await?)
    }

    /// Rename or move an attachment. The owning task and upload time are kept.
    #[instrument(skip(self, input))]
    pub async fn update_attachment(
        &self,
        id: &str,
        input: AttachmentInput,
    ) -> ServiceResult<Attachment> {
        input.validate()?;
        let attachments = self.db.attachments();
        let mut attachment = attachments.get_by_id(id).await?;

        attachment.file_name = input.file_name;
        attachment.file_path = input.file_path;

        attachments.update(&attachment).await?;
        Ok(attachment)
    }

    #[instrument(skip(self))]
    pub async fn delete_attachment(&self, id: &str) -> ServiceResult<()> {
        Ok(self.db.attachments().delete(id).await?)
    }
}
