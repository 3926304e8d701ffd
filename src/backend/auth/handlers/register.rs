/**
 * Registration Handler
 *
 * `POST /users`
 *
 * # Registration Process
 *
 * 1. Check that username, password and fullname are present strings
 * 2. Check the username rules (at most 50 chars, `[A-Za-z0-9_]`)
 * 3. Check that the username is unused
 * 4. Hash the password with bcrypt
 * 5. Store the user and return it without the password
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};

use crate::backend::auth::service::AuthService;
use crate::backend::error::conversion::json_body;
use crate::backend::error::BackendResult;
use crate::shared::forum::{AddedUserData, ApiResponse, RegisterUserPayload};

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - missing or mistyped property, bad username, username taken
/// * `500 Internal Server Error` - hashing or database failure
///
/// # Example Request
///
/// ```http
/// POST /users HTTP/1.1
/// Content-Type: application/json
///
/// { "username": "dicoding", "password": "secret", "fullname": "Dicoding Indonesia" }
/// ```
///
/// # Example Response
///
/// ```json
/// {
///   "status": "success",
///   "data": {
///     "addedUser": { "id": "user-...", "username": "dicoding", "fullname": "Dicoding Indonesia" }
///   }
/// }
/// ```
pub async fn register_user(
    State(auth): State<AuthService>,
    body: Result<Json<RegisterUserPayload>, JsonRejection>,
) -> BackendResult<(StatusCode, Json<ApiResponse<AddedUserData>>)> {
    let payload = json_body(body, "create a new user")?;
    let added_user = auth.register_user(&payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(AddedUserData { added_user })),
    ))
}
