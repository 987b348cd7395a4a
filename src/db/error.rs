//! Database error types.
//!
//! This module provides abstracted error types for database operations.
//! It uses miette for fancy diagnostic output and thiserror for derive macros.
//! The error types are storage-backend agnostic.

use miette::Diagnostic;
use thiserror::Error;

/// Database operation errors.
#[derive(Error, Diagnostic, Debug)]
pub enum DbError {
    #[error("Entity not found: {entity_type} with id '{id}'")]
    #[diagnostic(code(taskboard::db::not_found))]
    NotFound { entity_type: String, id: String },

    #[error("Validation error: {message}")]
    #[diagnostic(code(taskboard::db::validation_error))]
    Validation { message: String },

    #[error("Conflict on {entity_type}: {message}")]
    #[diagnostic(
        code(taskboard::db::conflict),
        help("A record with the same unique value already exists")
    )]
    Conflict { entity_type: String, message: String },

    #[error("Storage error: {message}")]
    #[diagnostic(code(taskboard::db::storage_error))]
    Storage { message: String },

    #[error("Connection error: {message}")]
    #[diagnostic(code(taskboard::db::connection_error))]
    Connection { message: String },

    #[error("Migration error: {message}")]
    #[diagnostic(code(taskboard::db::migration_error))]
    Migration { message: String },
}

impl DbError {
    pub(crate) fn not_found(entity_type: &str, id: impl ToString) -> Self {
        DbError::NotFound {
            entity_type: entity_type.to_string(),
            id: id.to_string(),
        }
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
