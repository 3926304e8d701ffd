//! Backend Module
//!
//! This module contains all server-side code for the forum API: the Axum
//! HTTP server, authentication, the forum use cases and their storage.
//!
//! # Architecture
//!
//! - **`server`** - Server initialization, application state, database loading
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Registration, JWT sessions, user storage
//! - **`forum`** - Threads, comments, replies, likes
//! - **`store`** - In-memory implementation of every repository port
//! - **`middleware`** - Bearer token extraction
//! - **`error`** - Backend error type and its HTTP rendering
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - forum-server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── forum/          - Forum entities, ports, use cases, handlers
//! ├── store/          - In-memory store
//! ├── middleware/     - Request extractors
//! └── error/          - Error types
//! ```
//!
//! # Request Flow
//!
//! Handler → `AuthUser` (protected routes) → service use case → repository
//! port → PostgreSQL or memory. Every failure is a `BackendError`, rendered
//! as a `{status, message}` envelope.
//!
//! # Example
//!
//! ```rust,no_run
//! use forum_api::backend::create_app;
//! use forum_api::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app = create_app(AppConfig::from_env()?).await;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:5000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Threads, comments, replies and likes
pub mod forum;

/// In-memory repositories
pub mod store;

/// Middleware for request processing
pub mod middleware;

pub use error::{BackendError, BackendResult};
pub use server::{create_app, create_app_with_store};
pub use store::MemoryStore;
