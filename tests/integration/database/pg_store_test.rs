//! PostgreSQL repositories against a live database
//!
//! Run with `DATABASE_URL=... cargo test -- --ignored`.

use std::sync::Arc;

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use serial_test::serial;

use forum_api::backend::auth::sessions::{AuthenticationRepository, PgAuthenticationRepository};
use forum_api::backend::auth::users::{NewUser, PgUserRepository, UserRepository};
use forum_api::backend::forum::entities::{NewThread, DELETED_COMMENT_PLACEHOLDER};
use forum_api::backend::forum::repository::{CommentRepository, ThreadRepository};
use forum_api::backend::forum::{ForumService, PgForumStore};
use forum_api::backend::BackendError;
use forum_api::shared::forum::ContentPayload;

use crate::common::database::{database_url, TestDatabase};

async fn fixture() -> Option<(TestDatabase, PgForumStore, String)> {
    let url = database_url()?;
    let db = TestDatabase::new(url).await;
    let users = PgUserRepository::new(db.pool().clone());
    let user = users
        .add_user(NewUser::new("dicoding", "hash", "Dicoding Indonesia"))
        .await
        .unwrap();
    let store = PgForumStore::new(db.pool().clone());
    Some((db, store, user.id))
}

fn service(store: &PgForumStore) -> ForumService {
    let store = Arc::new(store.clone());
    ForumService::new(store.clone(), store.clone(), store.clone(), store)
}

fn content(text: &str) -> ContentPayload {
    serde_json::from_value(serde_json::json!({ "content": text })).unwrap()
}

#[tokio::test]
#[serial]
#[ignore = "requires DATABASE_URL"]
async fn test_users_and_tokens() {
    let Some((db, _, user_id)) = fixture().await else { return };
    let users = PgUserRepository::new(db.pool().clone());

    assert_matches!(
        users.verify_available_username("dicoding").await,
        Err(BackendError::InvariantError { .. })
    );
    assert_eq!(users.get_id_by_username("dicoding").await.unwrap(), user_id);
    assert_eq!(users.get_password_by_username("dicoding").await.unwrap(), "hash");

    let err = users
        .add_user(NewUser::new("dicoding", "hash", "Another Dicoding"))
        .await
        .unwrap_err();
    assert_matches!(err, BackendError::InvariantError { ref message } if message == "username is not available");

    let tokens = PgAuthenticationRepository::new(db.pool().clone());
    tokens.add_token("token").await.unwrap();
    tokens.check_availability_token("token").await.unwrap();
    tokens.delete_token("token").await.unwrap();
    assert!(tokens.check_availability_token("token").await.is_err());
}

#[tokio::test]
#[serial]
#[ignore = "requires DATABASE_URL"]
async fn test_thread_detail_on_postgres() {
    let Some((_db, store, user_id)) = fixture().await else { return };

    let thread = store
        .add_thread(NewThread {
            owner: user_id.clone(),
            title: "sebuah thread".to_string(),
            body: "sebuah body".to_string(),
        })
        .await
        .unwrap();

    let forum = service(&store);
    let first = forum.add_comment(&user_id, &thread.id, &content("one")).await.unwrap();
    let second = forum.add_comment(&user_id, &thread.id, &content("two")).await.unwrap();
    forum
        .add_reply(&user_id, &thread.id, &first.id, &content("reply"))
        .await
        .unwrap();
    forum.toggle_like(&user_id, &thread.id, &first.id).await.unwrap();
    forum.delete_comment(&user_id, &thread.id, &second.id).await.unwrap();

    let detail = forum.get_thread_detail(&thread.id).await.unwrap();
    assert_eq!(detail.username, "dicoding");
    assert_eq!(detail.comments.len(), 2);
    assert_eq!(detail.comments[0].like_count, 1);
    assert_eq!(detail.comments[0].replies.len(), 1);
    assert_eq!(detail.comments[1].content, DELETED_COMMENT_PLACEHOLDER);
    assert_eq!(detail.comments[1].like_count, 0);

    assert_matches!(
        store.verify_comment_availability("thread-other", &first.id).await,
        Err(BackendError::NotFoundError { .. })
    );
}

#[tokio::test]
#[serial]
#[ignore = "requires DATABASE_URL"]
async fn test_foreign_key_violation_is_client_error() {
    let Some((_db, store, _)) = fixture().await else { return };

    let err = store
        .add_thread(NewThread {
            owner: "user-missing".to_string(),
            title: "t".to_string(),
            body: "b".to_string(),
        })
        .await
        .unwrap_err();
    assert_matches!(err, BackendError::InvariantError { .. });
}
