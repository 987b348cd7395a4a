//! SQLx error mapping.
//!
//! Maps `sqlx::Error` to `DbError`. Constraint violations become semantic
//! variants so callers can tell client mistakes from storage failures.
//!
//! - UNIQUE violation → `DbError::Conflict`
//! - FOREIGN KEY violation → `DbError::Validation`
//! - Pool and I/O failures → `DbError::Connection`
//! - Everything else → `DbError::Storage`

use crate::db::DbError;

/// Map an SQLx error raised while operating on `entity_type`.
pub(crate) fn map_sqlx_error(err: sqlx::Error, entity_type: &str) -> DbError {
    match err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => DbError::Conflict {
            entity_type: entity_type.to_string(),
            message: db_err.message().to_string(),
        },
        sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
            DbError::Validation {
                message: format!(
                    "{} references a record that does not exist ({})",
                    entity_type,
                    db_err.message()
                ),
            }
        }
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            DbError::Connection {
                message: err.to_string(),
            }
        }
        other => DbError::Storage {
            message: other.to_string(),
        },
    }
}
