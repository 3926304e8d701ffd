//! Forum Module
//!
//! Threads, comments, replies and likes.
//!
//! # Module Structure
//!
//! ```text
//! forum/
//! ├── mod.rs          - Module exports and documentation
//! ├── entities.rs     - Validated inputs, stored rows, placeholders
//! ├── repository.rs   - Repository ports
//! ├── db.rs           - PostgreSQL implementation of the ports
//! ├── service.rs      - Use cases, including thread-detail assembly
//! └── handlers.rs     - HTTP handlers
//! ```
//!
//! # Deletion
//!
//! Comments and replies are never removed. Deleting one sets `is_deleted`,
//! and reads show a placeholder in place of the content. A deleted comment
//! keeps its replies and likes.

pub mod entities;
pub mod repository;
pub mod db;
pub mod service;
pub mod handlers;

pub use db::PgForumStore;
pub use service::{ForumService, LikeToggle};
