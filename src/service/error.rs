//! Service error types.

use miette::Diagnostic;
use thiserror::Error;

use crate::db::DbError;

/// Errors raised by the service layer.
#[derive(Error, Diagnostic, Debug)]
pub enum ServiceError {
    /// Client input failed a business rule before reaching storage.
    #[error("Validation error: {message}")]
    #[diagnostic(code(taskboard::service::validation))]
    Validation { message: String },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Db(#[from] DbError),

    #[error("Password hashing failed: {message}")]
    #[diagnostic(code(taskboard::service::password_hash))]
    PasswordHash { message: String },
}

/// Stable classification of a [`ServiceError`], independent of which layer
/// raised it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Conflict,
    Storage,
}

impl ServiceError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        ServiceError::Validation {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ServiceError::Validation { .. } => ErrorKind::Validation,
            ServiceError::Db(DbError::Validation { .. }) => ErrorKind::Validation,
            ServiceError::Db(DbError::NotFound { .. }) => ErrorKind::NotFound,
            ServiceError::Db(DbError::Conflict { .. }) => ErrorKind::Conflict,
            ServiceError::Db(_) | ServiceError::PasswordHash { .. } => ErrorKind::Storage,
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
