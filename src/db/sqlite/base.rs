//! Generic SQLx repository shared by every entity.
//!
//! An entity describes its table once through [`SqliteEntity`]; the
//! [`SqliteRepository`] builds every CRUD statement from that description.
//! Entity repositories hold one as a field and delegate to it, adding only
//! the queries whose shape is specific to them.

use std::marker::PhantomData;

use sqlx::query::Query;
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{Sqlite, SqlitePool};
use tracing::debug;
use uuid::Uuid;

use super::error::map_sqlx_error;
use super::helpers::{FilterValue, assignments, placeholders};
use crate::db::utils::parse_entity_id;
use crate::db::{DbError, DbResult, Page};

/// An SQLite query with its argument buffer.
pub(crate) type SqliteQuery<'q> = Query<'q, Sqlite, SqliteArguments<'q>>;

/// Table description of a persisted entity.
///
/// The primary key column is always `id` and holds the UUID as text.
pub(crate) trait SqliteEntity: Sized + Send + Sync + Unpin {
    /// Table name.
    const TABLE: &'static str;
    /// Name used in errors and logs.
    const ENTITY_TYPE: &'static str;
    /// Non-key columns, in the order `bind_columns` binds them.
    const COLUMNS: &'static [&'static str];

    fn id(&self) -> Uuid;

    /// Bind every column listed in `COLUMNS`, in order.
    fn bind_columns<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q>;

    fn from_row(row: &SqliteRow) -> DbResult<Self>;
}

/// `id, col_a, col_b, ...`
fn select_list<T: SqliteEntity>() -> String {
    let mut columns = Vec::with_capacity(T::COLUMNS.len() + 1);
    columns.push("id");
    columns.extend_from_slice(T::COLUMNS);
    columns.join(", ")
}

/// Generic CRUD over one entity table.
pub(crate) struct SqliteRepository<'a, T> {
    pool: &'a SqlitePool,
    _entity: PhantomData<fn() -> T>,
}

impl<'a, T: SqliteEntity> SqliteRepository<'a, T> {
    pub(crate) fn new(pool: &'a SqlitePool) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }

    pub(crate) fn pool(&self) -> &'a SqlitePool {
        self.pool
    }

    pub(crate) async fn create(&self, entity: &T) -> DbResult<()> {
        let sql = format!(
            "INSERT INTO {} (id, {}) VALUES (?, {})",
            T::TABLE,
            T::COLUMNS.join(", "),
            placeholders(T::COLUMNS.len())
        );

        let query = sqlx::query(&sql).bind(entity.id().to_string());
        entity
            .bind_columns(query)
            .execute(self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, T::ENTITY_TYPE))?;

        debug!(entity = T::ENTITY_TYPE, id = %entity.id(), "created");
        Ok(())
    }

    pub(crate) async fn get_by_id(&self, id: &str) -> DbResult<T> {
        let uuid = parse_entity_id(T::ENTITY_TYPE, id)?;
        let sql = format!(
            "SELECT {} FROM {} WHERE id = ?",
            select_list::<T>(),
            T::TABLE
        );

        let row = sqlx::query(&sql)
            .bind(uuid.to_string())
            .fetch_optional(self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, T::ENTITY_TYPE))?;

        match row {
            Some(row) => T::from_row(&row),
            None => Err(DbError::not_found(T::ENTITY_TYPE, uuid)),
        }
    }

    pub(crate) async fn update(&self, entity: &T) -> DbResult<()> {
        let sql = format!(
            "UPDATE {} SET {} WHERE id = ?",
            T::TABLE,
            assignments(T::COLUMNS)
        );

        let result = entity
            .bind_columns(sqlx::query(&sql))
            .bind(entity.id().to_string())
            .execute(self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, T::ENTITY_TYPE))?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found(T::ENTITY_TYPE, entity.id()));
        }

        debug!(entity = T::ENTITY_TYPE, id = %entity.id(), "updated");
        Ok(())
    }

    /// Delete by id. A missing row is not an error.
    pub(crate) async fn delete(&self, id: &str) -> DbResult<()> {
        let uuid = parse_entity_id(T::ENTITY_TYPE, id)?;
        let sql = format!("DELETE FROM {} WHERE id = ?", T::TABLE);

        let result = sqlx::query(&sql)
            .bind(uuid.to_string())
            .execute(self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, T::ENTITY_TYPE))?;

        debug!(
            entity = T::ENTITY_TYPE,
            id = %uuid,
            rows = result.rows_affected(),
            "deleted"
        );
        Ok(())
    }

    pub(crate) async fn list(&self, page: Page) -> DbResult<Vec<T>> {
        self.find_where(None, Vec::new(), Some(page)).await
    }

    /// Select rows matching `clause` (with `?` placeholders bound from
    /// `values`), in insertion order, optionally paginated.
    pub(crate) async fn find_where(
        &self,
        clause: Option<&str>,
        values: Vec<FilterValue>,
        page: Option<Page>,
    ) -> DbResult<Vec<T>> {
        let mut sql = format!("SELECT {} FROM {}", select_list::<T>(), T::TABLE);
        if let Some(clause) = clause {
            sql.push_str(" WHERE ");
            sql.push_str(clause);
        }
        sql.push_str(" ORDER BY rowid");
        if page.is_some() {
            sql.push_str(" LIMIT ? OFFSET ?");
        }

        let mut query = sqlx::query(&sql);
        for value in values {
            query = value.bind_to(query);
        }
        if let Some(page) = page {
            query = query.bind(page.limit()).bind(page.offset());
        }

        let rows = query
            .fetch_all(self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, T::ENTITY_TYPE))?;

        rows.iter().map(T::from_row).collect()
    }
}
