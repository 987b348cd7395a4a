//! SQLite implementation of the database traits.
//!
//! This module provides a SQLx-backed implementation of the repository
//! traits defined in the parent module. Every entity repository wraps the
//! generic `SqliteRepository` from `base`.

mod attachment;
mod base;
mod comment;
mod connection;
mod error;
mod helpers;
mod task;
mod user;

#[cfg(test)]
mod comment_test;
#[cfg(test)]
mod task_test;
#[cfg(test)]
mod test_support;

pub use attachment::SqliteAttachmentRepository;
pub use comment::SqliteCommentRepository;
pub use connection::{PoolConfig, SqliteDatabase};
pub use task::SqliteTaskRepository;
pub use user::SqliteUserRepository;
