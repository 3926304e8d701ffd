//! Integration tests
//!
//! - **`api`** - HTTP behaviour on the in-memory store
//! - **`database`** - PostgreSQL schema and store (requires `DATABASE_URL`)

pub mod api;
pub mod database;
