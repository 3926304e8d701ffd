/**
 * Error Conversion
 *
 * All backend errors implement `IntoResponse` from Axum, allowing them to be
 * returned directly from handlers.
 *
 * # Response Format
 *
 * Client errors:
 * ```json
 * { "status": "fail", "message": "thread not found" }
 * ```
 *
 * Server errors:
 * ```json
 * { "status": "error", "message": "an internal server error occurred" }
 * ```
 */

use axum::{
    extract::rejection::JsonRejection,
    response::{Response, IntoResponse},
    Json,
};
use crate::backend::error::types::BackendError;
use crate::shared::error::SharedError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let kind = if self.is_client_error() {
            tracing::warn!("Request failed ({}): {}", status.as_u16(), self);
            "fail"
        } else {
            tracing::error!("Request failed ({}): {:?}", status.as_u16(), self);
            "error"
        };

        let body = serde_json::json!({
            "status": kind,
            "message": self.message(),
        });

        (status, Json(body)).into_response()
    }
}

/// Unwrap a JSON body; an unreadable body counts as missing properties
pub fn json_body<T>(body: Result<Json<T>, JsonRejection>, action: &str) -> Result<T, BackendError> {
    match body {
        Ok(Json(payload)) => Ok(payload),
        Err(rejection) => {
            tracing::debug!("Rejected request body: {}", rejection.body_text());
            Err(SharedError::missing(action).into())
        }
    }
}
