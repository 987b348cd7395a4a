//! Fixtures shared by the SQLite repository tests.

use chrono::{DateTime, TimeZone, Utc};

use crate::db::utils::generate_entity_id;
use crate::db::{
    Attachment, Comment, Database, Repository, SqliteDatabase, Task, User, UserRepository,
    UserRole,
};

pub(super) async fn setup_db() -> SqliteDatabase {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");
    db.migrate().await.expect("Migration should succeed");
    db
}

pub(super) fn fixed_time(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, day, 9, 30, 0).unwrap()
}

pub(super) fn make_user(email: &str) -> User {
    User {
        id: generate_entity_id(),
        email: email.to_string(),
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
        role: UserRole::User,
        created_at: fixed_time(1),
        updated_at: fixed_time(1),
    }
}

pub(super) fn make_task(user: &User, title: &str) -> Task {
    Task {
        id: generate_entity_id(),
        title: title.to_string(),
        description: String::new(),
        status: "todo".to_string(),
        priority: 0,
        due_date: None,
        created_at: fixed_time(2),
        updated_at: fixed_time(2),
        user_id: user.id,
        comments: vec![],
        attachments: vec![],
    }
}

pub(super) fn make_comment(task: &Task, user: &User, content: &str) -> Comment {
    Comment {
        id: generate_entity_id(),
        content: content.to_string(),
        created_at: fixed_time(3),
        task_id: task.id,
        user_id: user.id,
    }
}

pub(super) fn make_attachment(task: &Task, file_name: &str) -> Attachment {
    Attachment {
        id: generate_entity_id(),
        file_name: file_name.to_string(),
        file_path: format!("/uploads/{}", file_name),
        uploaded_at: fixed_time(4),
        task_id: task.id,
    }
}

/// Insert a user and one of their tasks.
pub(super) async fn seed_task(db: &SqliteDatabase, email: &str, title: &str) -> (User, Task) {
    let user = make_user(email);
    db.users().create(&user).await.expect("Create user should succeed");
    let task = make_task(&user, title);
    db.tasks().create(&task).await.expect("Create task should succeed");
    (user, task)
}
