/**
 * Authentication Handlers
 *
 * - `POST /authentications` logs in and issues an access/refresh token pair
 * - `PUT /authentications` trades a stored refresh token for a new access token
 * - `DELETE /authentications` revokes a refresh token
 *
 * # Security
 *
 * - An unknown username is reported as 400, a wrong password as 401
 * - Only refresh tokens are persisted
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};

use crate::backend::auth::service::AuthService;
use crate::backend::error::conversion::json_body;
use crate::backend::error::BackendResult;
use crate::shared::forum::{ApiResponse, LoginPayload, RefreshTokenPayload, RefreshedToken, TokenPair};

/// Login handler
///
/// # Example Response
///
/// ```json
/// {
///   "status": "success",
///   "data": { "accessToken": "eyJhbGciOi...", "refreshToken": "eyJhbGciOi..." }
/// }
/// ```
pub async fn login(
    State(auth): State<AuthService>,
    body: Result<Json<LoginPayload>, JsonRejection>,
) -> BackendResult<(StatusCode, Json<ApiResponse<TokenPair>>)> {
    let payload = json_body(body, "log in")?;
    let tokens = auth.login(&payload).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::success(tokens))))
}

/// Refresh handler
pub async fn refresh_authentication(
    State(auth): State<AuthService>,
    body: Result<Json<RefreshTokenPayload>, JsonRejection>,
) -> BackendResult<Json<ApiResponse<RefreshedToken>>> {
    let payload = json_body(body, "refresh the authentication")?;
    let refreshed = auth.refresh(&payload).await?;

    Ok(Json(ApiResponse::success(refreshed)))
}

/// Logout handler
pub async fn logout(
    State(auth): State<AuthService>,
    body: Result<Json<RefreshTokenPayload>, JsonRejection>,
) -> BackendResult<Json<ApiResponse<()>>> {
    let payload = json_body(body, "delete the authentication")?;
    auth.logout(&payload).await?;

    Ok(Json(ApiResponse::ok()))
}
