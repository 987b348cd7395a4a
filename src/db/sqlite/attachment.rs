//! SQLite AttachmentRepository implementation.

use sqlx::SqlitePool;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

use super::base::{SqliteEntity, SqliteQuery, SqliteRepository};
use super::helpers::{FilterValue, column, id_column};
use crate::db::utils::parse_entity_id;
use crate::db::{Attachment, AttachmentRepository, DbResult, Page, Repository};

impl SqliteEntity for Attachment {
    const TABLE: &'static str = "attachments";
    const ENTITY_TYPE: &'static str = "Attachment";
    const COLUMNS: &'static [&'static str] = &["file_name", "file_path", "uploaded_at", "task_id"];

    fn id(&self) -> Uuid {
        self.id
    }

    fn bind_columns<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(&self.file_name)
            .bind(&self.file_path)
            .bind(self.uploaded_at)
            .bind(self.task_id.to_string())
    }

    fn from_row(row: &SqliteRow) -> DbResult<Self> {
        Ok(Attachment {
            id: id_column(row, "id")?,
            file_name: column(row, "file_name")?,
            file_path: column(row, "file_path")?,
            uploaded_at: column(row, "uploaded_at")?,
            task_id: id_column(row, "task_id")?,
        })
    }
}

/// SQLx-backed attachment repository.
pub struct SqliteAttachmentRepository<'a> {
    base: SqliteRepository<'a, Attachment>,
}

impl<'a> SqliteAttachmentRepository<'a> {
    pub(crate) fn new(pool: &'a SqlitePool) -> Self {
        Self {
            base: SqliteRepository::new(pool),
        }
    }
}

impl Repository<Attachment> for SqliteAttachmentRepository<'_> {
    async fn create(&self, attachment: &Attachment) -> DbResult<()> {
        self.base.create(attachment).await
    }

    async fn get_by_id(&self, id: &str) -> DbResult<Attachment> {
        self.base.get_by_id(id).await
    }

    async fn update(&self, attachment: &Attachment) -> DbResult<()> {
        self.base.update(attachment).await
    }

    async fn delete(&self, id: &str) -> DbResult<()> {
        self.base.delete(id).await
    }

    async fn list(&self, page: Page) -> DbResult<Vec<Attachment>> {
        self.base.list(page).await
    }
}

impl AttachmentRepository for SqliteAttachmentRepository<'_> {
    async fn get_by_task_id(&self, task_id: &str) -> DbResult<Vec<Attachment>> {
        let task_id = parse_entity_id("Task", task_id)?;
        self.base
            .find_where(Some("task_id = ?"), vec![FilterValue::from(task_id)], None)
            .await
    }
}
