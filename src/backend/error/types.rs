/**
 * Backend Error Types
 *
 * This module defines the single error type shared by repositories, use
 * cases and HTTP handlers.
 *
 * # Error Categories
 *
 * ## Client Errors
 *
 * Client errors are caused by the request and are reported verbatim:
 * - Invariant violations (400)
 * - Payload validation failures (400)
 * - Missing or invalid credentials (401)
 * - Acting on a resource owned by someone else (403)
 * - Unknown threads, comments, replies or users (404)
 *
 * ## Server Errors
 *
 * Server errors come from collaborators (database, hashing, token
 * signing). Their details are logged and replaced by a generic message.
 */

use thiserror::Error;
use axum::http::StatusCode;
use crate::shared::SharedError;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use forum_api::backend::error::BackendError;
///
/// let err = BackendError::not_found("thread not found");
/// assert_eq!(err.status_code().as_u16(), 404);
///
/// let err = BackendError::authorization("you are not the owner of this comment");
/// assert_eq!(err.status_code().as_u16(), 403);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// A domain rule was violated (e.g. a username is taken)
    #[error("Invariant error: {message}")]
    InvariantError {
        /// Human-readable error message
        message: String,
    },

    /// The request is not authenticated
    #[error("Authentication error: {message}")]
    AuthenticationError {
        /// Human-readable error message
        message: String,
    },

    /// The requester may not act on the resource
    #[error("Authorization error: {message}")]
    AuthorizationError {
        /// Human-readable error message
        message: String,
    },

    /// The resource does not exist
    #[error("Not found: {message}")]
    NotFoundError {
        /// Human-readable error message
        message: String,
    },

    /// Payload validation error (from shared module)
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Database error
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    /// Password hashing error
    #[error("Hash error: {0}")]
    HashError(#[from] bcrypt::BcryptError),

    /// Token signing error
    #[error("Token error: {0}")]
    TokenError(#[from] jsonwebtoken::errors::Error),
}

impl BackendError {
    /// Create a new invariant error
    pub fn invariant(message: impl Into<String>) -> Self {
        Self::InvariantError {
            message: message.into(),
        }
    }

    /// Create a new authentication error
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::AuthenticationError {
            message: message.into(),
        }
    }

    /// Create a new authorization error
    pub fn authorization(message: impl Into<String>) -> Self {
        Self::AuthorizationError {
            message: message.into(),
        }
    }

    /// Create a new not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFoundError {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `InvariantError`, `SharedError` - 400 Bad Request
    /// - `AuthenticationError` - 401 Unauthorized
    /// - `AuthorizationError` - 403 Forbidden
    /// - `NotFoundError` - 404 Not Found
    /// - everything else - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvariantError { .. } => StatusCode::BAD_REQUEST,
            Self::SharedError(_) => StatusCode::BAD_REQUEST,
            Self::AuthenticationError { .. } => StatusCode::UNAUTHORIZED,
            Self::AuthorizationError { .. } => StatusCode::FORBIDDEN,
            Self::NotFoundError { .. } => StatusCode::NOT_FOUND,
            Self::DatabaseError(_) | Self::HashError(_) | Self::TokenError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Whether the error was caused by the client
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }

    /// Get the client-facing error message
    ///
    /// Server errors never leak their cause.
    pub fn message(&self) -> String {
        match self {
            Self::InvariantError { message }
            | Self::AuthenticationError { message }
            | Self::AuthorizationError { message }
            | Self::NotFoundError { message } => message.clone(),
            Self::SharedError(err) => err.to_string(),
            Self::DatabaseError(_) | Self::HashError(_) | Self::TokenError(_) => {
                "an internal server error occurred".to_string()
            }
        }
    }
}
