/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Layers
 *
 * - `TraceLayer` logs every request and response through `tracing`
 * - The fallback answers unknown routes with a 404 envelope
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::routes::forum_routes::configure_forum_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// 1. **Account Routes**: registration and authentications
/// 2. **Forum Routes**: threads, comments, replies, likes
/// 3. **Fallback Handler**: 404 envelope
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new();

    let router = configure_api_routes(router);
    let router = configure_forum_routes(router);

    router
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

async fn route_not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({
            "status": "fail",
            "message": "route not found",
        })),
    )
}
