//! SQLite UserRepository implementation.

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

use super::base::{SqliteEntity, SqliteQuery, SqliteRepository};
use super::helpers::{column, id_column};
use crate::db::{DbError, DbResult, User, UserRepository, UserRole};

impl SqliteEntity for User {
    const TABLE: &'static str = "users";
    const ENTITY_TYPE: &'static str = "User";
    const COLUMNS: &'static [&'static str] =
        &["email", "password_hash", "role", "created_at", "updated_at"];

    fn id(&self) -> Uuid {
        self.id
    }

    fn bind_columns<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(&self.email)
            .bind(&self.password_hash)
            .bind(self.role.to_string())
            .bind(self.created_at)
            .bind(self.updated_at)
    }

    fn from_row(row: &SqliteRow) -> DbResult<Self> {
        let role: String = column(row, "role")?;
        let role = UserRole::from_str(&role).map_err(|message| DbError::Storage { message })?;

        Ok(User {
            id: id_column(row, "id")?,
            email: column(row, "email")?,
            password_hash: column(row, "password_hash")?,
            role,
            created_at: column(row, "created_at")?,
            updated_at: column(row, "updated_at")?,
        })
    }
}

/// SQLx-backed user repository.
///
/// Only creation and lookup are exposed; the generic update, delete and
/// list operations stay internal.
pub struct SqliteUserRepository<'a> {
    base: SqliteRepository<'a, User>,
}

impl<'a> SqliteUserRepository<'a> {
    pub(crate) fn new(pool: &'a SqlitePool) -> Self {
        Self {
            base: SqliteRepository::new(pool),
        }
    }
}

impl UserRepository for SqliteUserRepository<'_> {
    async fn create(&self, user: &User) -> DbResult<()> {
        self.base.create(user).await
    }

    async fn get_by_id(&self, id: &str) -> DbResult<User> {
        self.base.get_by_id(id).await
    }
}
