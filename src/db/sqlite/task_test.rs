//! Tests for SqliteTaskRepository.

use super::test_support::{fixed_time, make_attachment, make_comment, make_task, seed_task, setup_db};
use crate::db::{Database, DbError, Page, Repository, TaskRepository};

#[tokio::test(flavor = "multi_thread")]
async fn task_create_and_get() {
    let db = setup_db().await;
    let (_, mut task) = seed_task(&db, "ada@example.com", "Write report").await;

    let retrieved = db
        .tasks()
        .get_by_id(&task.id.to_string())
        .await
        .expect("Get should succeed");

    assert_eq!(retrieved, task);
    assert_eq!(retrieved.created_at, retrieved.updated_at);
    assert!(retrieved.comments.is_empty());
    assert!(retrieved.attachments.is_empty());

    task.due_date = Some(fixed_time(20));
    db.tasks().update(&task).await.expect("Update should succeed");
    let retrieved = db.tasks().get_by_id(&task.id.to_string()).await.unwrap();
    assert_eq!(retrieved.due_date, Some(fixed_time(20)));
}

#[tokio::test(flavor = "multi_thread")]
async fn task_get_missing_is_not_found() {
    let db = setup_db().await;

    let missing = uuid::Uuid::new_v4().to_string();
    let err = db.tasks().get_by_id(&missing).await.unwrap_err();
    assert!(matches!(err, DbError::NotFound { .. }));
}

#[tokio::test(flavor = "multi_thread")]
async fn task_get_malformed_id_is_validation() {
    let db = setup_db().await;

    let err = db.tasks().get_by_id("not-a-uuid").await.unwrap_err();
    assert!(matches!(err, DbError::Validation { .. }));
}

#[tokio::test(flavor = "multi_thread")]
async fn task_update_persists_fields() {
    let db = setup_db().await;
    let (_, mut task) = seed_task(&db, "ada@example.com", "Write report").await;
    let tasks = db.tasks();

    task.status = "done".to_string();
    task.priority = 3;
    task.updated_at = fixed_time(5);
    tasks.update(&task).await.expect("Update should succeed");

    let retrieved = tasks.get_by_id(&task.id.to_string()).await.unwrap();
    assert_eq!(retrieved.status, "done");
    assert_eq!(retrieved.priority, 3);
    assert!(retrieved.updated_at > retrieved.created_at);
}

#[tokio::test(flavor = "multi_thread")]
async fn task_update_missing_is_not_found() {
    let db = setup_db().await;
    let (user, _) = seed_task(&db, "ada@example.com", "Existing").await;

    let ghost = make_task(&user, "Never stored");
    let err = db.tasks().update(&ghost).await.unwrap_err();
    assert!(matches!(err, DbError::NotFound { .. }));
}

#[tokio::test(flavor = "multi_thread")]
async fn task_delete_is_idempotent() {
    let db = setup_db().await;
    let (_, task) = seed_task(&db, "ada@example.com", "Short lived").await;
    let tasks = db.tasks();
    let id = task.id.to_string();

    tasks.delete(&id).await.expect("First delete should succeed");
    tasks.delete(&id).await.expect("Second delete should succeed");

    let err = tasks.get_by_id(&id).await.unwrap_err();
    assert!(matches!(err, DbError::NotFound { .. }));
}

#[tokio::test(flavor = "multi_thread")]
async fn task_delete_removes_comments_and_attachments() {
    let db = setup_db().await;
    let (user, task) = seed_task(&db, "ada@example.com", "With dependents").await;
    let (_, other) = seed_task(&db, "bob@example.com", "Untouched").await;

    for i in 0..3 {
        db.comments()
            .create(&make_comment(&task, &user, &format!("comment {}", i)))
            .await
            .unwrap();
    }
    for i in 0..2 {
        db.attachments()
            .create(&make_attachment(&task, &format!("file{}.txt", i)))
            .await
            .unwrap();
    }
    db.comments()
        .create(&make_comment(&other, &user, "keep me"))
        .await
        .unwrap();

    let loaded = db.tasks().get_by_id(&task.id.to_string()).await.unwrap();
    assert_eq!(loaded.comments.len(), 3);
    assert_eq!(loaded.attachments.len(), 2);

    db.tasks()
        .delete(&task.id.to_string())
        .await
        .expect("Delete should succeed");

    let (comments,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM comments WHERE task_id = ?")
        .bind(task.id.to_string())
        .fetch_one(db.pool())
        .await
        .unwrap();
    let (attachments,): (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM attachments WHERE task_id = ?")
            .bind(task.id.to_string())
            .fetch_one(db.pool())
            .await
            .unwrap();
    assert_eq!(comments, 0);
    assert_eq!(attachments, 0);

    let survivor = db.tasks().get_by_id(&other.id.to_string()).await.unwrap();
    assert_eq!(survivor.comments.len(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn task_list_empty() {
    let db = setup_db().await;

    let tasks = db.tasks().list(Page::default()).await.unwrap();
    assert!(tasks.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn task_list_pagination_in_insertion_order() {
    let db = setup_db().await;
    let (user, _) = seed_task(&db, "ada@example.com", "Task 0").await;
    let tasks = db.tasks();
    for i in 1..5 {
        tasks
            .create(&make_task(&user, &format!("Task {}", i)))
            .await
            .unwrap();
    }

    let first = tasks.get_all(Page::new(0, 2)).await.unwrap();
    let titles: Vec<_> = first.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["Task 0", "Task 1"]);

    let last = tasks.list(Page::new(4, 2)).await.unwrap();
    assert_eq!(last.len(), 1);
    assert_eq!(last[0].title, "Task 4");

    let beyond = tasks.list(Page::new(10, 2)).await.unwrap();
    assert!(beyond.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn task_filter_by_status_priority_and_user() {
    let db = setup_db().await;
    let (ada, _) = seed_task(&db, "ada@example.com", "Ada todo").await;
    let (bob, _) = seed_task(&db, "bob@example.com", "Bob todo").await;
    let tasks = db.tasks();

    let mut done = make_task(&ada, "Ada done");
    done.status = "done".to_string();
    done.priority = 2;
    tasks.create(&done).await.unwrap();

    let by_status = tasks.get_by_status("done", Page::default()).await.unwrap();
    assert_eq!(by_status.len(), 1);
    assert_eq!(by_status[0].id, done.id);

    let by_priority = tasks.get_by_priority(2, Page::default()).await.unwrap();
    assert_eq!(by_priority.len(), 1);
    assert_eq!(by_priority[0].id, done.id);

    let by_ada = tasks
        .get_by_user_id(&ada.id.to_string(), Page::default())
        .await
        .unwrap();
    assert_eq!(by_ada.len(), 2);
    assert!(by_ada.iter().all(|t| t.user_id == ada.id));

    let by_bob = tasks
        .get_by_user_id(&bob.id.to_string(), Page::default())
        .await
        .unwrap();
    assert_eq!(by_bob.len(), 1);

    let err = tasks
        .get_by_user_id("nope", Page::default())
        .await
        .unwrap_err();
    assert!(matches!(err, DbError::Validation { .. }));
}

#[tokio::test(flavor = "multi_thread")]
async fn task_search_is_case_insensitive() {
    let db = setup_db().await;
    let (user, _) = seed_task(&db, "ada@example.com", "Foobar").await;
    let tasks = db.tasks();

    let mut described = make_task(&user, "Unrelated title");
    described.description = "mentions FOO in passing".to_string();
    tasks.create(&described).await.unwrap();
    tasks.create(&make_task(&user, "bar only")).await.unwrap();

    let found = tasks.search("foo", Page::default()).await.unwrap();
    let titles: Vec<_> = found.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["Foobar", "Unrelated title"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn task_search_folds_non_ascii_case() {
    let db = setup_db().await;
    let (user, _) = seed_task(&db, "ada@example.com", "ÉTÉ planning").await;
    let tasks = db.tasks();

    let mut greek = make_task(&user, "Physics notes");
    greek.description = "Resistance in ΩHM".to_string();
    tasks.create(&greek).await.unwrap();

    let found = tasks.search("été", Page::default()).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title, "ÉTÉ planning");

    let found = tasks.search("Été PLANNING", Page::default()).await.unwrap();
    assert_eq!(found.len(), 1);

    let found = tasks.search("ωhm", Page::default()).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, greek.id);
}

#[tokio::test(flavor = "multi_thread")]
async fn task_search_follows_updates() {
    let db = setup_db().await;
    let (_, mut task) = seed_task(&db, "ada@example.com", "Über release").await;
    let tasks = db.tasks();

    task.title = "Renamed".to_string();
    tasks.update(&task).await.unwrap();

    assert!(tasks.search("über", Page::default()).await.unwrap().is_empty());
    let found = tasks.search("renamed", Page::default()).await.unwrap();
    assert_eq!(found.len(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn task_search_treats_wildcards_literally() {
    let db = setup_db().await;
    let (user, _) = seed_task(&db, "ada@example.com", "100% done").await;
    let tasks = db.tasks();
    tasks.create(&make_task(&user, "1000 done")).await.unwrap();
    tasks.create(&make_task(&user, "snake_case")).await.unwrap();
    tasks.create(&make_task(&user, "snakeXcase")).await.unwrap();

    let percent = tasks.search("0%", Page::default()).await.unwrap();
    assert_eq!(percent.len(), 1);
    assert_eq!(percent[0].title, "100% done");

    let underscore = tasks.search("e_c", Page::default()).await.unwrap();
    assert_eq!(underscore.len(), 1);
    assert_eq!(underscore[0].title, "snake_case");
}

#[tokio::test(flavor = "multi_thread")]
async fn task_create_with_unknown_user_is_validation() {
    let db = setup_db().await;
    let (user, _) = seed_task(&db, "ada@example.com", "Existing").await;

    let mut orphan = make_task(&user, "Orphan");
    orphan.user_id = uuid::Uuid::new_v4();
    let err = db.tasks().create(&orphan).await.unwrap_err();
    assert!(matches!(err, DbError::Validation { .. }));
}
