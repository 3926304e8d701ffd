//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - An app on the in-memory store, wrapped in an `axum_test::TestServer`
//! - Account helpers (register, login, bearer header)
//! - Forum helpers (thread, comment, reply)
//! - Database fixtures for the PostgreSQL tests
//! - Custom assertion macros


pub use auth_helpers::*;
pub use database::*;
pub use forum_helpers::*;
