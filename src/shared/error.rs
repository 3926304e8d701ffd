//! Shared Error Types
//!
//! This module defines the payload validation errors raised before any
//! request touches the store. Every variant maps to `400 Bad Request`.
//!
//! # Error Categories
//!
//! - `MissingProperty` - A required property is absent, `null` or empty
//! - `InvalidType` - A property is present but is not a string
//! - `ValidationError` - A property breaks a field rule (length, charset)
//!
//! # Usage
//!
//! ```rust
//! use forum_api::shared::error::{required_string, SharedError};
//!
//! let value = serde_json::json!("hello");
//! let text = required_string(Some(&value), "create thread").unwrap();
//! assert_eq!(text, "hello");
//!
//! let error = required_string(None, "create thread").unwrap_err();
//! assert!(matches!(error, SharedError::MissingProperty { .. }));
//! ```
use serde_json::Value;
use thiserror::Error;

/// Validation errors shared by every payload parser
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// A required property is missing
    #[error("cannot {action} because a required property is missing")]
    MissingProperty {
        /// The action that was attempted, e.g. "create thread"
        action: String,
    },

    /// A property has the wrong data type
    #[error("cannot {action} because a property has the wrong data type")]
    InvalidType {
        /// The action that was attempted
        action: String,
    },

    /// A property breaks a field rule
    #[error("{message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new missing-property error
    pub fn missing(action: impl Into<String>) -> Self {
        Self::MissingProperty {
            action: action.into(),
        }
    }

    /// Create a new wrong-type error
    pub fn invalid_type(action: impl Into<String>) -> Self {
        Self::InvalidType {
            action: action.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Extract a required, non-empty string property.
///
/// `None`, `null` and `""` count as missing. Any other non-string JSON value
/// is a type error.
pub fn required_string(value: Option<&Value>, action: &str) -> Result<String, SharedError> {
    match value {
        None | Some(Value::Null) => Err(SharedError::missing(action)),
        Some(Value::String(s)) if s.is_empty() => Err(SharedError::missing(action)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(SharedError::invalid_type(action)),
    }
}

/// Presence pass over every required property before any type check.
///
/// A payload missing one field and mistyping another reports the missing
/// field.
pub fn require_present(values: &[Option<&Value>], action: &str) -> Result<(), SharedError> {
    let missing = values.iter().any(|value| match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    });

    if missing {
        Err(SharedError::missing(action))
    } else {
        Ok(())
    }
}
