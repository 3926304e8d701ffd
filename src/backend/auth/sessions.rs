/**
 * Session Management and JWT Tokens
 *
 * This module handles JWT token generation and validation for user sessions,
 * plus the store of issued refresh tokens.
 *
 * Access tokens and refresh tokens are both HS256 JWTs, signed with separate
 * keys. Only refresh tokens are persisted; logging out deletes the stored copy.
 */

use async_trait::async_trait;
use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::backend::error::{BackendError, BackendResult};
use crate::shared::config::AppConfig;

/// Refresh tokens expire after 30 days
pub const REFRESH_TOKEN_AGE: u64 = 30 * 24 * 60 * 60;

pub const REFRESH_TOKEN_INVALID: &str = "refresh token is invalid";
pub const REFRESH_TOKEN_NOT_FOUND: &str = "refresh token not found";

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub id: String,
    pub username: String,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
}

/// Signs and verifies access and refresh tokens
#[derive(Clone)]
pub struct TokenManager {
    access_key: String,
    refresh_key: String,
    access_token_age: u64,
}

impl TokenManager {
    pub fn new(access_key: impl Into<String>, refresh_key: impl Into<String>, access_token_age: u64) -> Self {
        Self {
            access_key: access_key.into(),
            refresh_key: refresh_key.into(),
            access_token_age,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.access_token_key.clone(),
            config.refresh_token_key.clone(),
            config.access_token_age,
        )
    }

    pub fn create_access_token(&self, id: &str, username: &str) -> BackendResult<String> {
        sign(&self.access_key, id, username, self.access_token_age)
    }

    pub fn create_refresh_token(&self, id: &str, username: &str) -> BackendResult<String> {
        sign(&self.refresh_key, id, username, REFRESH_TOKEN_AGE)
    }

    /// Raw verification result; the caller decides how to report failures
    pub fn verify_access_token(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        verify(&self.access_key, token)
    }

    /// Fails with `refresh token is invalid` (400)
    pub fn verify_refresh_token(&self, token: &str) -> BackendResult<Claims> {
        verify(&self.refresh_key, token).map_err(|e| {
            tracing::warn!("Refresh token rejected: {:?}", e);
            BackendError::invariant(REFRESH_TOKEN_INVALID)
        })
    }
}

fn sign(secret: &str, id: &str, username: &str, age: u64) -> BackendResult<String> {
    let now = Utc::now().timestamp().max(0) as u64;

    let claims = Claims {
        id: id.to_string(),
        username: username.to_string(),
        iat: now,
        exp: now + age,
    };

    let key = EncodingKey::from_secret(secret.as_bytes());
    Ok(encode(&Header::new(Algorithm::HS256), &claims, &key)?)
}

fn verify(secret: &str, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let key = DecodingKey::from_secret(secret.as_bytes());
    let validation = Validation::new(Algorithm::HS256);

    let token_data = decode::<Claims>(token, &key, &validation)?;
    Ok(token_data.claims)
}

#[async_trait]
pub trait AuthenticationRepository: Send + Sync {
    async fn add_token(&self, token: &str) -> BackendResult<()>;

    /// Fails with `refresh token not found` (400)
    async fn check_availability_token(&self, token: &str) -> BackendResult<()>;

    async fn delete_token(&self, token: &str) -> BackendResult<()>;
}

/// Postgres-backed refresh token store
#[derive(Clone)]
pub struct PgAuthenticationRepository {
    pool: PgPool,
}

impl PgAuthenticationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuthenticationRepository for PgAuthenticationRepository {
    async fn add_token(&self, token: &str) -> BackendResult<()> {
        sqlx::query("INSERT INTO authentications (token) VALUES ($1)")
            .bind(token)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn check_availability_token(&self, token: &str) -> BackendResult<()> {
        sqlx::query("SELECT 1 FROM authentications WHERE token = $1")
            .bind(token)
            .fetch_optional(&self.pool)
            .await?
            .map(|_| ())
            .ok_or_else(|| BackendError::invariant(REFRESH_TOKEN_NOT_FOUND))
    }

    async fn delete_token(&self, token: &str) -> BackendResult<()> {
        sqlx::query("DELETE FROM authentications WHERE token = $1")
            .bind(token)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
