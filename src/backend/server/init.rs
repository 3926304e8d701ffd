/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server,
 * including store selection, service wiring, and route configuration.
 *
 * # Initialization Process
 *
 * 1. Load the optional database pool
 * 2. Wire the repositories: PostgreSQL when a pool exists, memory otherwise
 * 3. Build the auth and forum services
 * 4. Create and configure the router
 */

use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use crate::backend::auth::service::AuthService;
use crate::backend::auth::sessions::{PgAuthenticationRepository, TokenManager};
use crate::backend::auth::users::PgUserRepository;
use crate::backend::forum::db::PgForumStore;
use crate::backend::forum::service::ForumService;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_database;
use crate::backend::server::state::AppState;
use crate::backend::store::MemoryStore;
use crate::shared::config::AppConfig;

/// Create and configure the Axum application
///
/// Uses PostgreSQL when `database_url` is set and reachable, and the
/// in-memory store otherwise.
pub async fn create_app(config: AppConfig) -> Router<()> {
    tracing::info!("Initializing forum API server");

    let db_pool = load_database(&config).await;

    let app_state = match db_pool {
        Some(pool) => postgres_state(config, pool),
        None => memory_state(config, MemoryStore::new()),
    };

    create_router(app_state)
}

/// Create the application on an explicit in-memory store
///
/// Tests use this to inspect or seed the store behind the router.
pub fn create_app_with_store(config: AppConfig, store: MemoryStore) -> Router<()> {
    create_router(memory_state(config, store))
}

fn postgres_state(config: AppConfig, pool: PgPool) -> AppState {
    tracing::info!("Wiring PostgreSQL repositories");

    let tokens = Arc::new(TokenManager::from_config(&config));
    let auth = AuthService::new(
        Arc::new(PgUserRepository::new(pool.clone())),
        Arc::new(PgAuthenticationRepository::new(pool.clone())),
        tokens.clone(),
        config.bcrypt_cost,
    );

    let store = Arc::new(PgForumStore::new(pool));
    let forum = ForumService::new(store.clone(), store.clone(), store.clone(), store);

    AppState { tokens, auth, forum }
}

fn memory_state(config: AppConfig, store: MemoryStore) -> AppState {
    tracing::info!("Wiring in-memory repositories");

    let tokens = Arc::new(TokenManager::from_config(&config));
    let auth = store.auth_service(tokens.clone(), config.bcrypt_cost);
    let forum = store.forum_service();

    AppState { tokens, auth, forum }
}
