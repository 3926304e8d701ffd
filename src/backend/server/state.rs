/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct serves as the central state container for the
 * application, holding:
 * - The `TokenManager` used by the auth extractor
 * - The auth and forum use cases, already wired to a store
 *
 * Every field is cheap to clone: services hold their repositories behind
 * `Arc`.
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::service::AuthService;
use crate::backend::auth::sessions::TokenManager;
use crate::backend::forum::service::ForumService;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    /// Verifies access tokens for protected routes
    pub tokens: Arc<TokenManager>,

    pub auth: AuthService,

    pub forum: ForumService,
}

impl FromRef<AppState> for AuthService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.auth.clone()
    }
}

impl FromRef<AppState> for ForumService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.forum.clone()
    }
}

impl FromRef<AppState> for Arc<TokenManager> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}
