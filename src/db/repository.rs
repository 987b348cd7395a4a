//! Repository traits for data access abstraction.
//!
//! These traits define the contract for data access, allowing different
//! storage backends to be swapped without changing business logic.
//!
//! [`Repository`] is the generic CRUD contract shared by every entity.
//! Entity traits extend it with the lookups their use cases need.
//! [`UserRepository`] deliberately exposes only create and lookup.

use std::future::Future;

use crate::db::{
    DbResult, Page,
    models::{Attachment, Comment, Task, User},
};

/// Generic CRUD operations over one entity type keyed by `id`.
pub trait Repository<T> {
    /// Insert a new record.
    fn create(&self, entity: &T) -> impl Future<Output = DbResult<()>> + Send;

    /// Fetch a record by its identifier.
    ///
    /// Fails with `Validation` for a malformed id and `NotFound` when absent.
    fn get_by_id(&self, id: &str) -> impl Future<Output = DbResult<T>> + Send;

    /// Overwrite the full record matching the entity's identifier.
    fn update(&self, entity: &T) -> impl Future<Output = DbResult<()>> + Send;

    /// Delete a record by identifier. Deleting a missing record succeeds.
    fn delete(&self, id: &str) -> impl Future<Output = DbResult<()>> + Send;

    /// List one page of records in insertion order.
    fn list(&self, page: Page) -> impl Future<Output = DbResult<Vec<T>>> + Send;
}

/// Repository for Task operations.
pub trait TaskRepository: Repository<Task> {
    /// Tasks owned by a user.
    fn get_by_user_id(
        &self,
        user_id: &str,
        page: Page,
    ) -> impl Future<Output = DbResult<Vec<Task>>> + Send;

    /// Tasks with exactly the given status.
    fn get_by_status(
        &self,
        status: &str,
        page: Page,
    ) -> impl Future<Output = DbResult<Vec<Task>>> + Send;

    /// Tasks with exactly the given priority.
    fn get_by_priority(
        &self,
        priority: i32,
        page: Page,
    ) -> impl Future<Output = DbResult<Vec<Task>>> + Send;

    /// All tasks, paginated.
    fn get_all(&self, page: Page) -> impl Future<Output = DbResult<Vec<Task>>> + Send;

    /// Case-insensitive substring search over title and description.
    ///
    /// `%` and `_` in the query match themselves, not as wildcards.
    fn search(&self, query: &str, page: Page) -> impl Future<Output = DbResult<Vec<Task>>> + Send;
}

/// Repository for Comment operations.
pub trait CommentRepository: Repository<Comment> {
    /// All comments on a task.
    fn get_by_task_id(&self, task_id: &str) -> impl Future<Output = DbResult<Vec<Comment>>> + Send;
}

/// Repository for Attachment operations.
pub trait AttachmentRepository: Repository<Attachment> {
    /// All attachments on a task.
    fn get_by_task_id(
        &self,
        task_id: &str,
    ) -> impl Future<Output = DbResult<Vec<Attachment>>> + Send;
}

/// Repository for User operations.
pub trait UserRepository {
    /// Create a new user. A duplicate email fails with `Conflict`.
    fn create(&self, user: &User) -> impl Future<Output = DbResult<()>> + Send;

    /// Get a user by ID.
    fn get_by_id(&self, id: &str) -> impl Future<Output = DbResult<User>> + Send;
}

/// Combined database interface.
pub trait Database: Send + Sync + 'static {
    type Tasks<'a>: TaskRepository + Send + Sync
    where
        Self: 'a;
    type Users<'a>: UserRepository + Send + Sync
    where
        Self: 'a;
    type Comments<'a>: CommentRepository + Send + Sync
    where
        Self: 'a;
    type Attachments<'a>: AttachmentRepository + Send + Sync
    where
        Self: 'a;

    /// Run pending migrations.
    fn migrate(&self) -> impl Future<Output = DbResult<()>> + Send;

    /// Get the task repository.
    fn tasks(&self) -> Self::Tasks<'_>;

    /// Get the user repository.
    fn users(&self) -> Self::Users<'_>;

    /// Get the comment repository.
    fn comments(&self) -> Self::Comments<'_>;

    /// Get the attachment repository.
    fn attachments(&self) -> Self::Attachments<'_>;
}
