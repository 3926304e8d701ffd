/**
 * User Model and Database Operations
 *
 * This module handles user registration input, the `UserRepository` port
 * and its PostgreSQL implementation.
 */

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::backend::error::{BackendError, BackendResult};
use crate::backend::forum::db::map_insert_error;
use crate::backend::forum::entities::generate_id;
use crate::shared::error::{require_present, required_string, SharedError};
use crate::shared::forum::{AddedUser, RegisterUserPayload};

/// Column width of `users.username`
pub const MAX_USERNAME_LEN: usize = 50;

pub const USERNAME_NOT_AVAILABLE: &str = "username is not available";
pub const USERNAME_NOT_FOUND: &str = "username not found";

/// Validated registration input, password still in plain text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterUser {
    pub username: String,
    pub password: String,
    pub fullname: String,
}

impl RegisterUser {
    pub fn parse(payload: &RegisterUserPayload) -> Result<Self, SharedError> {
        const ACTION: &str = "create a new user";
        require_present(
            &[
                payload.username.as_ref(),
                payload.password.as_ref(),
                payload.fullname.as_ref(),
            ],
            ACTION,
        )?;

        let username = required_string(payload.username.as_ref(), ACTION)?;
        let password = required_string(payload.password.as_ref(), ACTION)?;
        let fullname = required_string(payload.fullname.as_ref(), ACTION)?;

        validate_username(&username)?;

        Ok(Self {
            username,
            password,
            fullname,
        })
    }
}

/// Usernames are at most 50 characters of `[A-Za-z0-9_]`
pub fn validate_username(username: &str) -> Result<(), SharedError> {
    if username.chars().count() > MAX_USERNAME_LEN {
        return Err(SharedError::validation(
            "username",
            format!(
                "cannot create a new user because the username exceeds {} characters",
                MAX_USERNAME_LEN
            ),
        ));
    }

    if !username.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(SharedError::validation(
            "username",
            "cannot create a new user because the username contains forbidden characters",
        ));
    }

    Ok(())
}

/// A user ready to be stored, password already hashed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub fullname: String,
}

impl NewUser {
    pub fn new(
        username: impl Into<String>,
        password_hash: impl Into<String>,
        fullname: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password_hash.into(),
            fullname: fullname.into(),
        }
    }
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fails with `username is not available` when taken
    async fn verify_available_username(&self, username: &str) -> BackendResult<()>;

    async fn add_user(&self, user: NewUser) -> BackendResult<AddedUser>;

    /// Stored bcrypt hash; fails with `username not found`
    async fn get_password_by_username(&self, username: &str) -> BackendResult<String>;

    async fn get_id_by_username(&self, username: &str) -> BackendResult<String>;
}

/// Postgres-backed user repository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// A concurrent registration can pass the availability check and still hit
/// the unique index on `users.username`
fn map_user_insert_error(err: sqlx::Error) -> BackendError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            tracing::warn!("Username taken during insert: {}", db_err.message());
            BackendError::invariant(USERNAME_NOT_AVAILABLE)
        }
        _ => map_insert_error(err),
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn verify_available_username(&self, username: &str) -> BackendResult<()> {
        let existing = sqlx::query("SELECT 1 FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;

        match existing {
            Some(_) => Err(BackendError::invariant(USERNAME_NOT_AVAILABLE)),
            None => Ok(()),
        }
    }

    async fn add_user(&self, user: NewUser) -> BackendResult<AddedUser> {
        let id = generate_id("user");

        let row = sqlx::query(
            r#"
            INSERT INTO users (id, username, password, fullname)
            VALUES ($1, $2, $3, $4)
            RETURNING id, username, fullname
            "#,
        )
        .bind(&id)
        .bind(&user.username)
        .bind(&user.password)
        .bind(&user.fullname)
        .fetch_one(&self.pool)
        .await
        .map_err(map_user_insert_error)?;

        Ok(AddedUser {
            id: row.get("id"),
            username: row.get("username"),
            fullname: row.get("fullname"),
        })
    }

    async fn get_password_by_username(&self, username: &str) -> BackendResult<String> {
        let row = sqlx::query("SELECT password FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| BackendError::invariant(USERNAME_NOT_FOUND))?;

        Ok(row.get("password"))
    }

    async fn get_id_by_username(&self, username: &str) -> BackendResult<String> {
        let row = sqlx::query("SELECT id FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| BackendError::invariant(USERNAME_NOT_FOUND))?;

        Ok(row.get("id"))
    }
}
