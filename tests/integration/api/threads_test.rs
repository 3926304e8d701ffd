//! `POST /threads` and `GET /threads/{threadId}`

use axum::http::{header::AUTHORIZATION, HeaderValue, StatusCode};
use axum::body::Bytes;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::{
    bearer, create_comment, create_reply, create_test_user, create_thread, get_thread, TestApp,
};

#[tokio::test]
async fn test_post_thread_success() {
    let app = TestApp::new();
    let user = create_test_user(&app.server, "dicoding").await;
    let (name, value) = bearer(&user.access_token);

    let response = app
        .server
        .post("/threads")
        .add_header(name, value)
        .json(&json!({ "title": "sebuah thread", "body": "sebuah body thread" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["status"], "success");
    let added = &body["data"]["addedThread"];
    assert_eq!(added["title"], "sebuah thread");
    assert_eq!(added["owner"], user.id.as_str());
    assert_contains!(added["id"].as_str().unwrap(), "thread-");
}

#[tokio::test]
async fn test_post_thread_requires_authentication() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/threads")
        .json(&json!({ "title": "sebuah thread", "body": "sebuah body thread" }))
        .await;
    assert_envelope!(response, StatusCode::UNAUTHORIZED, "fail", "Missing authentication");

    let response = app
        .server
        .post("/threads")
        .add_header(AUTHORIZATION, HeaderValue::from_static("Bearer not.a.jwt"))
        .json(&json!({ "title": "sebuah thread", "body": "sebuah body thread" }))
        .await;
    assert_envelope!(response, StatusCode::UNAUTHORIZED, "fail", "invalid access token");

    let response = app
        .server
        .post("/threads")
        .add_header(AUTHORIZATION, HeaderValue::from_static("Token abc"))
        .json(&json!({ "title": "sebuah thread", "body": "sebuah body thread" }))
        .await;
    assert_envelope!(response, StatusCode::UNAUTHORIZED, "fail", "Missing authentication");
}

#[tokio::test]
async fn test_post_thread_bad_payloads() {
    let app = TestApp::new();
    let user = create_test_user(&app.server, "dicoding").await;

    let payloads = [
        json!({ "title": "sebuah thread" }),
        json!({ "title": "sebuah thread", "body": 123 }),
        json!({ "title": "x".repeat(51), "body": "sebuah body thread" }),
    ];

    for payload in payloads {
        let (name, value) = bearer(&user.access_token);
        let response = app
            .server
            .post("/threads")
            .add_header(name, value)
            .json(&payload)
            .await;
        assert_envelope!(response, StatusCode::BAD_REQUEST, "fail");
    }
}

#[tokio::test]
async fn test_post_thread_unreadable_body() {
    let app = TestApp::new();
    let user = create_test_user(&app.server, "dicoding").await;
    let (name, value) = bearer(&user.access_token);

    let response = app
        .server
        .post("/threads")
        .add_header(name, value)
        .bytes(Bytes::from_static(b"{\"title\": "))
        .content_type("application/json")
        .await;

    assert_envelope!(response, StatusCode::BAD_REQUEST, "fail");
}

#[tokio::test]
async fn test_get_thread_not_found() {
    let app = TestApp::new();
    let response = app.server.get("/threads/thread-xxx").await;
    assert_envelope!(response, StatusCode::NOT_FOUND, "fail", "thread not found");
}

#[tokio::test]
async fn test_get_thread_without_comments() {
    let app = TestApp::new();
    let user = create_test_user(&app.server, "dicoding").await;
    let thread_id = create_thread(&app.server, &user).await;

    let response = app.server.get(&format!("/threads/{}", thread_id)).await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "success");

    let thread = &body["data"]["thread"];
    assert_eq!(thread["id"], thread_id.as_str());
    assert_eq!(thread["title"], "sebuah thread");
    assert_eq!(thread["body"], "sebuah body thread");
    assert_eq!(thread["username"], "dicoding");
    let date = thread["date"].as_str().unwrap();
    let (_, fraction) = date.rsplit_once('.').unwrap();
    assert_eq!(fraction.len(), "775Z".len(), "millisecond date expected, got {}", date);
    assert_eq!(thread["comments"], json!([]));
}

#[tokio::test]
async fn test_get_thread_detail() {
    let app = TestApp::new();
    let alice = create_test_user(&app.server, "alice").await;
    let bob = create_test_user(&app.server, "bob").await;

    let thread_id = create_thread(&app.server, &alice).await;
    let first = create_comment(&app.server, &alice, &thread_id, "first comment").await;
    let second = create_comment(&app.server, &bob, &thread_id, "second comment").await;
    let reply_a = create_reply(&app.server, &bob, &thread_id, &first, "reply one").await;
    let reply_b = create_reply(&app.server, &alice, &thread_id, &first, "reply two").await;

    // Bob deletes his comment and his reply; likes land on the deleted comment too.
    let (name, value) = bearer(&bob.access_token);
    app.server
        .delete(&format!("/threads/{}/comments/{}", thread_id, second))
        .add_header(name, value)
        .await
        .assert_status_ok();
    let (name, value) = bearer(&bob.access_token);
    app.server
        .delete(&format!("/threads/{}/comments/{}/replies/{}", thread_id, first, reply_a))
        .add_header(name, value)
        .await
        .assert_status_ok();
    for user in [&alice, &bob] {
        let (name, value) = bearer(&user.access_token);
        app.server
            .put(&format!("/threads/{}/comments/{}/likes", thread_id, first))
            .add_header(name, value)
            .await
            .assert_status_ok();
    }
    let (name, value) = bearer(&alice.access_token);
    app.server
        .put(&format!("/threads/{}/comments/{}/likes", thread_id, second))
        .add_header(name, value)
        .await
        .assert_status_ok();

    let thread = get_thread(&app.server, &thread_id).await;
    let comments = thread["comments"].as_array().unwrap();
    assert_eq!(comments.len(), 2);

    assert_eq!(comments[0]["id"], first.as_str());
    assert_eq!(comments[0]["username"], "alice");
    assert_eq!(comments[0]["content"], "first comment");
    assert_eq!(comments[0]["likeCount"], 2);
    let replies = comments[0]["replies"].as_array().unwrap();
    assert_eq!(replies.len(), 2);
    assert_eq!(replies[0]["id"], reply_a.as_str());
    assert_eq!(replies[0]["content"], "**balasan telah dihapus**");
    assert_eq!(replies[0]["username"], "bob");
    assert_eq!(replies[1]["id"], reply_b.as_str());
    assert_eq!(replies[1]["content"], "reply two");

    assert_eq!(comments[1]["id"], second.as_str());
    assert_eq!(comments[1]["username"], "bob");
    assert_eq!(comments[1]["content"], "**komentar telah dihapus**");
    assert_eq!(comments[1]["likeCount"], 1);
    assert_eq!(comments[1]["replies"], json!([]));
}
