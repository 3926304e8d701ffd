//! Storage backends
//!
//! The PostgreSQL repositories live next to the code that owns their
//! tables (`auth::users`, `auth::sessions`, `forum::db`). This module
//! holds the in-process store used when no database is configured, and by
//! the tests.

pub mod memory;

pub use memory::MemoryStore;
