//! Service layer.
//!
//! One service per entity. A service turns a client input shape into an
//! entity, fills in server-assigned fields (identifier, timestamps, password
//! hash) and hands it to the matching repository. Services are generic over
//! [`Database`](crate::db::Database) and cheap to clone.

mod attachment;
mod comment;
mod error;
mod password;
mod task;
mod user;

#[cfg(test)]
mod test_support;

pub use attachment::{AttachmentInput, AttachmentService};
pub use comment::{CommentInput, CommentService};
pub use error::{ErrorKind, ServiceError, ServiceResult};
pub use password::{hash_password, verify_password};
pub use task::{TaskInput, TaskService};
pub use user::{UserInput, UserService};
