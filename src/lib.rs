//! Forum API - Main Library
//!
//! A discussion-forum backend: users register and log in, create threads,
//! comment on them, reply to comments and toggle likes on comments.
//!
//! # Module Structure
//!
//! - **`shared`** - Wire types, validation errors, configuration
//!   - Request payloads and response bodies
//!   - `SharedError` and the property helpers
//!   - `AppConfig` loaded from the environment
//!
//! - **`backend`** - The Axum server
//!   - Authentication with JWT access and refresh tokens
//!   - Forum use cases over repository ports
//!   - PostgreSQL and in-memory storage
//!
//! # Usage
//!
//! ```rust,no_run
//! use forum_api::backend::create_app;
//! use forum_api::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::builder()
//!     .access_token_key("access-secret")
//!     .refresh_token_key("refresh-secret")
//!     .build()?;
//! let app = create_app(config).await;
//! # Ok(())
//! # }
//! ```
//!
//! # Thread Detail
//!
//! `GET /threads/{threadId}` returns the thread with every comment, each
//! comment's replies and its like count. Deleted comments and replies stay
//! in place with their content replaced by a placeholder.

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
