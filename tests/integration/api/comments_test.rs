//! `POST /threads/{threadId}/comments` and
//! `DELETE /threads/{threadId}/comments/{commentId}`

use axum::http::StatusCode;
use serde_json::{json, Value};

use crate::common::{bearer, create_comment, create_test_user, create_thread, get_thread, TestApp};

#[tokio::test]
async fn test_post_comment_success() {
    let app = TestApp::new();
    let user = create_test_user(&app.server, "dicoding").await;
    let thread_id = create_thread(&app.server, &user).await;
    let (name, value) = bearer(&user.access_token);

    let response = app
        .server
        .post(&format!("/threads/{}/comments", thread_id))
        .add_header(name, value)
        .json(&json!({ "content": "sebuah comment" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: Value = response.json();
    let added = &body["data"]["addedComment"];
    assert_eq!(added["content"], "sebuah comment");
    assert_eq!(added["owner"], user.id.as_str());
    assert_contains!(added["id"].as_str().unwrap(), "comment-");
}

#[tokio::test]
async fn test_post_comment_errors() {
    let app = TestApp::new();
    let user = create_test_user(&app.server, "dicoding").await;
    let thread_id = create_thread(&app.server, &user).await;

    let (name, value) = bearer(&user.access_token);
    let response = app
        .server
        .post("/threads/thread-xxx/comments")
        .add_header(name, value)
        .json(&json!({ "content": "sebuah comment" }))
        .await;
    assert_envelope!(response, StatusCode::NOT_FOUND, "fail", "thread not found");

    let (name, value) = bearer(&user.access_token);
    let response = app
        .server
        .post(&format!("/threads/{}/comments", thread_id))
        .add_header(name, value)
        .json(&json!({ "content": true }))
        .await;
    assert_envelope!(response, StatusCode::BAD_REQUEST, "fail");

    let response = app
        .server
        .post(&format!("/threads/{}/comments", thread_id))
        .json(&json!({ "content": "sebuah comment" }))
        .await;
    assert_envelope!(response, StatusCode::UNAUTHORIZED, "fail");
}

#[tokio::test]
async fn test_delete_comment_by_non_owner() {
    let app = TestApp::new();
    let owner = create_test_user(&app.server, "owner").await;
    let other = create_test_user(&app.server, "other").await;
    let thread_id = create_thread(&app.server, &owner).await;
    let comment_id = create_comment(&app.server, &owner, &thread_id, "mine").await;

    let (name, value) = bearer(&other.access_token);
    let response = app
        .server
        .delete(&format!("/threads/{}/comments/{}", thread_id, comment_id))
        .add_header(name, value)
        .await;
    assert_envelope!(
        response,
        StatusCode::FORBIDDEN,
        "fail",
        "you are not the owner of this comment"
    );

    let thread = get_thread(&app.server, &thread_id).await;
    assert_eq!(thread["comments"][0]["content"], "mine");
}

#[tokio::test]
async fn test_delete_comment_success_and_repeat() {
    let app = TestApp::new();
    let user = create_test_user(&app.server, "dicoding").await;
    let thread_id = create_thread(&app.server, &user).await;
    let comment_id = create_comment(&app.server, &user, &thread_id, "mine").await;

    for _ in 0..2 {
        let (name, value) = bearer(&user.access_token);
        let response = app
            .server
            .delete(&format!("/threads/{}/comments/{}", thread_id, comment_id))
            .add_header(name, value)
            .await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["status"], "success");
    }

    let thread = get_thread(&app.server, &thread_id).await;
    assert_eq!(thread["comments"][0]["content"], "**komentar telah dihapus**");
}

#[tokio::test]
async fn test_delete_comment_not_found() {
    let app = TestApp::new();
    let user = create_test_user(&app.server, "dicoding").await;
    let thread_id = create_thread(&app.server, &user).await;
    let other_thread = create_thread(&app.server, &user).await;
    let comment_id = create_comment(&app.server, &user, &thread_id, "mine").await;

    // Wrong thread, unknown comment, unknown thread: all report the comment.
    let paths = [
        format!("/threads/{}/comments/{}", other_thread, comment_id),
        format!("/threads/{}/comments/comment-xxx", thread_id),
        "/threads/abcd/comments/abcd".to_string(),
    ];
    for path in paths {
        let (name, value) = bearer(&user.access_token);
        let response = app.server.delete(&path).add_header(name, value).await;
        assert_envelope!(response, StatusCode::NOT_FOUND, "fail", "comment not found");
    }
}
