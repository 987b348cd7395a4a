//! Domain models for the taskboard database.
//!
//! These models are storage-agnostic and represent the core entities
//! used throughout the application.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// Pagination
// =============================================================================

/// Offset/limit window for list queries.
///
/// Construction normalizes out-of-range values instead of failing: a negative
/// offset becomes 0 and a non-positive limit becomes [`Page::DEFAULT_LIMIT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    offset: i64,
    limit: i64,
}

impl Page {
    /// Limit applied when the caller gives none or an unusable one.
    pub const DEFAULT_LIMIT: i64 = 10;

    pub fn new(offset: i64, limit: i64) -> Self {
        Self {
            offset: offset.max(0),
            limit: if limit <= 0 {
                Self::DEFAULT_LIMIT
            } else {
                limit
            },
        }
    }

    /// Build a page from optional parameters, defaulting missing ones.
    pub fn from_params(offset: Option<i64>, limit: Option<i64>) -> Self {
        Self::new(offset.unwrap_or(0), limit.unwrap_or(Self::DEFAULT_LIMIT))
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(0, Self::DEFAULT_LIMIT)
    }
}

/// UUID identifier used for all entities.
pub type Id = Uuid;

// =============================================================================
// Entities
// =============================================================================

/// A unit of work owned by a user.
///
/// `status` is free-form; `todo`, `in progress` and `done` are the values
/// clients conventionally send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: Id,
    pub title: String,
    pub description: String,
    pub status: String,
    pub priority: i32,
    pub due_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user_id: Id,
    /// Populated by single-task lookups; list queries leave it empty.
    #[serde(default)]
    pub comments: Vec<Comment>,
    /// Populated by single-task lookups; list queries leave it empty.
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

/// An account that owns tasks and writes comments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Id,
    pub email: String,
    /// Argon2 PHC string. Never serialized outward.
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Role of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    User,
    Admin,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::User => write!(f, "user"),
            UserRole::Admin => write!(f, "admin"),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(UserRole::User),
            "admin" => Ok(UserRole::Admin),
            _ => Err(format!("Invalid user role: {}", s)),
        }
    }
}

/// A note left on a task by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Id,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub task_id: Id,
    pub user_id: Id,
}

/// A file reference attached to a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub id: Id,
    pub file_name: String,
    /// Object-store URL or local filesystem path.
    pub file_path: String,
    pub uploaded_at: DateTime<Utc>,
    pub task_id: Id,
}
