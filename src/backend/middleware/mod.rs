//! Middleware Module
//!
//! Request processing that runs before handlers.
//!
//! - **`auth`** - Bearer token extraction for protected routes

pub mod auth;

pub use auth::{AuthUser, AuthenticatedUser};
