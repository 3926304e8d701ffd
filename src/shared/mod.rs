//! Shared Module
//!
//! This module contains the types shared by the HTTP layer, the use cases
//! and the integration tests: wire bodies, payload validation errors and
//! configuration.
//!
//! # Overview
//!
//! Nothing in here touches the database or the network. Everything is plain
//! data designed for serialization over the JSON API.

/// Forum request and response bodies
pub mod forum;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use forum::ApiResponse;
