//! Fixtures shared by the service tests.

use std::sync::Arc;

use super::{TaskInput, TaskService, UserInput, UserService};
use crate::db::{Database, SqliteDatabase, Task, User};

pub(super) async fn setup_db() -> Arc<SqliteDatabase> {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");
    db.migrate().await.expect("Migration should succeed");
    Arc::new(db)
}

pub(super) fn user_input(email: &str) -> UserInput {
    UserInput {
        email: email.to_string(),
        password: "s3cret-pass".to_string(),
        role: None,
    }
}

pub(super) fn task_input(user: &User, title: &str) -> TaskInput {
    TaskInput {
        title: title.to_string(),
        description: String::new(),
        status: "todo".to_string(),
        priority: 1,
        due_date: None,
        user_id: user.id.to_string(),
    }
}

pub(super) async fn create_user(db: &Arc<SqliteDatabase>, email: &str) -> User {
    UserService::new(Arc::clone(db))
        .create_user(user_input(email))
        .await
        .expect("Create user should succeed")
}

pub(super) async fn create_task(db: &Arc<SqliteDatabase>, user: &User, title: &str) -> Task {
    TaskService::new(Arc::clone(db))
        .create_task(task_input(user, title))
        .await
        .expect("Create task should succeed")
}
