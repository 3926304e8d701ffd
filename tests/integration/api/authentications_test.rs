//! `POST`, `PUT` and `DELETE /authentications`

use axum::http::StatusCode;
use serde_json::{json, Value};

use crate::common::{create_test_user, TestApp, TEST_PASSWORD};

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::new();
    let user = create_test_user(&app.server, "dicoding").await;

    assert!(!user.access_token.is_empty());
    assert!(!user.refresh_token.is_empty());
    assert_ne!(user.access_token, user.refresh_token);
}

#[tokio::test]
async fn test_login_unknown_username() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/authentications")
        .json(&json!({ "username": "nobody", "password": TEST_PASSWORD }))
        .await;

    assert_envelope!(response, StatusCode::BAD_REQUEST, "fail", "username not found");
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::new();
    create_test_user(&app.server, "dicoding").await;

    let response = app
        .server
        .post("/authentications")
        .json(&json!({ "username": "dicoding", "password": "wrong_password" }))
        .await;

    assert_envelope!(response, StatusCode::UNAUTHORIZED, "fail", "wrong credentials");
}

#[tokio::test]
async fn test_login_missing_password() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/authentications")
        .json(&json!({ "username": "dicoding" }))
        .await;

    assert_envelope!(response, StatusCode::BAD_REQUEST, "fail");
}

#[tokio::test]
async fn test_refresh_access_token() {
    let app = TestApp::new();
    let user = create_test_user(&app.server, "dicoding").await;

    let response = app
        .server
        .put("/authentications")
        .json(&json!({ "refreshToken": user.refresh_token }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "success");
    assert!(body["data"]["accessToken"].is_string());
}

#[tokio::test]
async fn test_refresh_rejections() {
    let app = TestApp::new();
    let user = create_test_user(&app.server, "dicoding").await;

    let response = app.server.put("/authentications").json(&json!({})).await;
    assert_envelope!(response, StatusCode::BAD_REQUEST, "fail");

    let response = app
        .server
        .put("/authentications")
        .json(&json!({ "refreshToken": 123 }))
        .await;
    assert_envelope!(response, StatusCode::BAD_REQUEST, "fail");

    let response = app
        .server
        .put("/authentications")
        .json(&json!({ "refreshToken": "xxx" }))
        .await;
    assert_envelope!(response, StatusCode::BAD_REQUEST, "fail", "refresh token is invalid");

    // An access token is signed with the other key.
    let response = app
        .server
        .put("/authentications")
        .json(&json!({ "refreshToken": user.access_token }))
        .await;
    assert_envelope!(response, StatusCode::BAD_REQUEST, "fail", "refresh token is invalid");
}

#[tokio::test]
async fn test_logout_then_refresh_fails() {
    let app = TestApp::new();
    let user = create_test_user(&app.server, "dicoding").await;

    let response = app
        .server
        .delete("/authentications")
        .json(&json!({ "refreshToken": user.refresh_token }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "success");

    let response = app
        .server
        .put("/authentications")
        .json(&json!({ "refreshToken": user.refresh_token }))
        .await;
    assert_envelope!(response, StatusCode::BAD_REQUEST, "fail", "refresh token not found");

    let response = app
        .server
        .delete("/authentications")
        .json(&json!({ "refreshToken": user.refresh_token }))
        .await;
    assert_envelope!(response, StatusCode::BAD_REQUEST, "fail", "refresh token not found");
}
