//! SQLite CommentRepository implementation.

use sqlx::SqlitePool;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

use super::base::{SqliteEntity, SqliteQuery, SqliteRepository};
use super::helpers::{FilterValue, column, id_column};
use crate::db::utils::parse_entity_id;
use crate::db::{Comment, CommentRepository, DbResult, Page, Repository};

impl SqliteEntity for Comment {
    const TABLE: &'static str = "comments";
    const ENTITY_TYPE: &'static str = "Comment";
    const COLUMNS: &'static [&'static str] = &["content", "created_at", "task_id", "user_id"];

    fn id(&self) -> Uuid {
        self.id
    }

    fn bind_columns<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(&self.content)
            .bind(self.created_at)
            .bind(self.task_id.to_string())
            .bind(self.user_id.to_string())
    }

    fn from_row(row: &SqliteRow) -> DbResult<Self> {
        Ok(Comment {
            id: id_column(row, "id")?,
            content: column(row, "content")?,
            created_at: column(row, "created_at")?,
            task_id: id_column(row, "task_id")?,
            user_id: id_column(row, "user_id")?,
        })
    }
}

/// SQLx-backed comment repository.
pub struct SqliteCommentRepository<'a> {
    base: SqliteRepository<'a, Comment>,
}

impl<'a> SqliteCommentRepository<'a> {
    pub(crate) fn new(pool: &'a SqlitePool) -> Self {
        Self {
            base: SqliteRepository::new(pool),
        }
    }
}

impl Repository<Comment> for SqliteCommentRepository<'_> {
    async fn create(&self, comment: &Comment) -> DbResult<()> {
        self.base.create(comment).await
    }

    async fn get_by_id(&self, id: &str) -> DbResult<Comment> {
        self.base.get_by_id(id).await
    }

    async fn update(&self, comment: &Comment) -> DbResult<()> {
        self.base.update(comment).await
    }

    async fn delete(&self, id: &str) -> DbResult<()> {
        self.base.delete(id).await
    }

    async fn list(&self, page: Page) -> DbResult<Vec<Comment>> {
        self.base.list(page).await
    }
}

impl CommentRepository for SqliteCommentRepository<'_> {
    async fn get_by_task_id(&self, task_id: &str) -> DbResult<Vec<Comment>> {
        let task_id = parse_entity_id("Task", task_id)?;
        self.base
            .find_where(Some("task_id = ?"), vec![FilterValue::from(task_id)], None)
            .await
    }
}
