//! Shared helper functions for SQLite repositories.

use sqlx::sqlite::SqliteRow;
use sqlx::{Decode, Row, Sqlite, Type};
use uuid::Uuid;

use super::base::SqliteQuery;
use crate::db::{DbError, DbResult};

/// A value bound to a `?` placeholder in a filter clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum FilterValue {
    Text(String),
    Integer(i64),
}

impl FilterValue {
    pub(crate) fn bind_to(self, query: SqliteQuery<'_>) -> SqliteQuery<'_> {
        match self {
            FilterValue::Text(value) => query.bind(value),
            FilterValue::Integer(value) => query.bind(value),
        }
    }
}

impl From<Uuid> for FilterValue {
    fn from(id: Uuid) -> Self {
        FilterValue::Text(id.to_string())
    }
}

/// Comma-separated `?` placeholders.
pub(crate) fn placeholders(count: usize) -> String {
    vec!["?"; count].join(", ")
}

/// `a = ?, b = ?` assignment list for UPDATE statements.
pub(crate) fn assignments(columns: &[&str]) -> String {
    columns
        .iter()
        .map(|column| format!("{} = ?", column))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Escape LIKE metacharacters so user input only matches literally.
///
/// Pair with `ESCAPE '\'` in the statement. The escape character itself is
/// escaped first so a trailing backslash cannot swallow the closing `%`.
pub(crate) fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Build a `%...%` LIKE pattern for a substring match.
pub(crate) fn contains_pattern(input: &str) -> String {
    format!("%{}%", escape_like(input))
}

/// Read a column, mapping decode failures to a storage error.
pub(crate) fn column<'r, V>(row: &'r SqliteRow, name: &str) -> DbResult<V>
where
    V: Decode<'r, Sqlite> + Type<Sqlite>,
{
    row.try_get(name).map_err(|e| DbError::Storage {
        message: format!("Failed to read column '{}': {}", name, e),
    })
}

/// Read a UUID stored as hyphenated text.
pub(crate) fn id_column(row: &SqliteRow, name: &str) -> DbResult<Uuid> {
    let raw: String = column(row, name)?;
    Uuid::parse_str(&raw).map_err(|e| DbError::Storage {
        message: format!("Invalid UUID '{}' in column '{}': {}", raw, name, e),
    })
}
