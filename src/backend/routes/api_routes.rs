/**
 * Account Route Handlers
 *
 * # Routes
 *
 * - `POST /users` - User registration
 * - `POST /authentications` - Login
 * - `PUT /authentications` - Refresh the access token
 * - `DELETE /authentications` - Logout
 *
 * All of these are public; they are how a client gets a token.
 */

use axum::{
    routing::post,
    Router,
};

use crate::backend::auth::{login, logout, refresh_authentication, register_user};
use crate::backend::server::state::AppState;

/// Configure account routes
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/users", post(register_user))
        .route(
            "/authentications",
            post(login).put(refresh_authentication).delete(logout),
        )
}
