/**
 * Authentication Extractor
 *
 * Protected handlers take an `AuthUser` argument. Extraction reads the
 * `Authorization: Bearer <token>` header, verifies the token with the
 * access key and yields the authenticated user. Failures reject the
 * request with a 401 envelope before the handler runs.
 */

use std::sync::Arc;

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::backend::auth::sessions::TokenManager;
use crate::backend::error::BackendError;

pub const MISSING_AUTHENTICATION: &str = "Missing authentication";
pub const INVALID_ACCESS_TOKEN: &str = "invalid access token";

/// Authenticated user data extracted from the access token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: String,
    pub username: String,
}

/// Axum extractor for the authenticated user
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

/// Token from an `Authorization: Bearer <token>` header value
pub fn bearer_token(header: &str) -> Option<&str> {
    header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

impl<S> FromRequestParts<S> for AuthUser
where
    Arc<TokenManager>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .and_then(bearer_token)
            .ok_or_else(|| {
                tracing::warn!("Missing or malformed Authorization header");
                BackendError::authentication(MISSING_AUTHENTICATION)
            })?;

        let tokens = Arc::<TokenManager>::from_ref(state);
        let claims = tokens.verify_access_token(token).map_err(|e| {
            tracing::warn!("Invalid token: {:?}", e);
            BackendError::authentication(INVALID_ACCESS_TOKEN)
        })?;

        Ok(AuthUser(AuthenticatedUser {
            id: claims.id,
            username: claims.username,
        }))
    }
}
