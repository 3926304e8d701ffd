//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs           - Module exports and documentation
//! ├── router.rs        - Main router creation, tracing and fallback
//! ├── api_routes.rs    - /users and /authentications
//! └── forum_routes.rs  - /threads and everything below it
//! ```

/// Main router creation
pub mod router;

/// Account routes
pub mod api_routes;

/// Forum routes
pub mod forum_routes;

pub use router::create_router;
