//! Tests for SqliteCommentRepository.

use super::test_support::{make_comment, seed_task, setup_db};
use crate::db::{CommentRepository, Database, DbError, Page, Repository};

#[tokio::test(flavor = "multi_thread")]
async fn comment_crud() {
    let db = setup_db().await;
    let (user, task) = seed_task(&db, "ada@example.com", "Discuss").await;
    let comments = db.comments();

    let mut comment = make_comment(&task, &user, "First!");
    comments.create(&comment).await.expect("Create should succeed");

    let retrieved = comments
        .get_by_id(&comment.id.to_string())
        .await
        .expect("Get should succeed");
    assert_eq!(retrieved, comment);

    comment.content = "Edited".to_string();
    comments.update(&comment).await.expect("Update should succeed");
    let retrieved = comments.get_by_id(&comment.id.to_string()).await.unwrap();
    assert_eq!(retrieved.content, "Edited");

    let all = comments.list(Page::default()).await.unwrap();
    assert_eq!(all.len(), 1);

    comments
        .delete(&comment.id.to_string())
        .await
        .expect("Delete should succeed");
    let err = comments
        .get_by_id(&comment.id.to_string())
        .await
        .unwrap_err();
    assert!(matches!(err, DbError::NotFound { .. }));
}

#[tokio::test(flavor = "multi_thread")]
async fn comment_get_by_task_id() {
    let db = setup_db().await;
    let (user, task) = seed_task(&db, "ada@example.com", "Busy").await;
    let (_, quiet) = seed_task(&db, "bob@example.com", "Quiet").await;
    let comments = db.comments();

    for content in ["one", "two", "three"] {
        comments
            .create(&make_comment(&task, &user, content))
            .await
            .unwrap();
    }

    let found = comments.get_by_task_id(&task.id.to_string()).await.unwrap();
    let contents: Vec<_> = found.iter().map(|c| c.content.as_str()).collect();
    assert_eq!(contents, vec!["one", "two", "three"]);

    let none = comments.get_by_task_id(&quiet.id.to_string()).await.unwrap();
    assert!(none.is_empty());

    let err = comments.get_by_task_id("bogus").await.unwrap_err();
    assert!(matches!(err, DbError::Validation { .. }));
}

#[tokio::test(flavor = "multi_thread")]
async fn comment_on_missing_task_is_validation() {
    let db = setup_db().await;
    let (user, task) = seed_task(&db, "ada@example.com", "Real").await;

    let mut comment = make_comment(&task, &user, "Lost");
    comment.task_id = uuid::Uuid::new_v4();
    let err = db.comments().create(&comment).await.unwrap_err();
    assert!(matches!(err, DbError::Validation { .. }));
}

#[tokio::test(flavor = "multi_thread")]
async fn comment_delete_is_idempotent() {
    let db = setup_db().await;
    let (user, task) = seed_task(&db, "ada@example.com", "Discuss").await;
    let comments = db.comments();

    comments
        .delete(&uuid::Uuid::new_v4().to_string())
        .await
        .expect("Deleting an unknown comment should succeed");

    let comment = make_comment(&task, &user, "Short lived");
    comments.create(&comment).await.unwrap();
    let id = comment.id.to_string();

    comments.delete(&id).await.expect("First delete should succeed");
    comments.delete(&id).await.expect("Second delete should succeed");

    let err = comments.get_by_id(&id).await.unwrap_err();
    assert!(matches!(err, DbError::NotFound { .. }));
}
