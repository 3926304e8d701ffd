//! Registration and session use cases
//!
//! `AuthService` owns the user and refresh token repositories together with
//! the `TokenManager`, and implements register, login, refresh and logout.

use std::sync::Arc;

use bcrypt::{hash, verify};

use crate::backend::auth::sessions::{AuthenticationRepository, TokenManager};
use crate::backend::auth::users::{NewUser, RegisterUser, UserRepository};
use crate::backend::error::{BackendError, BackendResult};
use crate::shared::error::{require_present, required_string};
use crate::shared::forum::{
    AddedUser, LoginPayload, RefreshTokenPayload, RefreshedToken, RegisterUserPayload, TokenPair,
};

pub const WRONG_CREDENTIALS: &str = "wrong credentials";

#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    authentications: Arc<dyn AuthenticationRepository>,
    tokens: Arc<TokenManager>,
    bcrypt_cost: u32,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        authentications: Arc<dyn AuthenticationRepository>,
        tokens: Arc<TokenManager>,
        bcrypt_cost: u32,
    ) -> Self {
        Self {
            users,
            authentications,
            tokens,
            bcrypt_cost,
        }
    }

    pub fn tokens(&self) -> &TokenManager {
        &self.tokens
    }

    pub async fn register_user(&self, payload: &RegisterUserPayload) -> BackendResult<AddedUser> {
        let user = RegisterUser::parse(payload)?;

        self.users.verify_available_username(&user.username).await?;

        let password_hash = hash(&user.password, self.bcrypt_cost)?;
        let added = self
            .users
            .add_user(NewUser::new(user.username, password_hash, user.fullname))
            .await?;

        tracing::info!("User registered: {} ({})", added.username, added.id);
        Ok(added)
    }

    pub async fn login(&self, payload: &LoginPayload) -> BackendResult<TokenPair> {
        const ACTION: &str = "log in";
        require_present(&[payload.username.as_ref(), payload.password.as_ref()], ACTION)?;
        let username = required_string(payload.username.as_ref(), ACTION)?;
        let password = required_string(payload.password.as_ref(), ACTION)?;

        let stored_hash = self.users.get_password_by_username(&username).await?;
        if !verify(&password, &stored_hash)? {
            tracing::warn!("Invalid password for user: {}", username);
            return Err(BackendError::authentication(WRONG_CREDENTIALS));
        }

        let id = self.users.get_id_by_username(&username).await?;
        let access_token = self.tokens.create_access_token(&id, &username)?;
        let refresh_token = self.tokens.create_refresh_token(&id, &username)?;

        self.authentications.add_token(&refresh_token).await?;

        tracing::info!("User logged in: {}", username);
        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }

    pub async fn refresh(&self, payload: &RefreshTokenPayload) -> BackendResult<RefreshedToken> {
        let refresh_token = required_string(payload.refresh_token.as_ref(), "refresh the authentication")?;

        let claims = self.tokens.verify_refresh_token(&refresh_token)?;
        self.authentications
            .check_availability_token(&refresh_token)
            .await?;

        let access_token = self.tokens.create_access_token(&claims.id, &claims.username)?;
        tracing::debug!("Access token refreshed for {}", claims.username);

        Ok(RefreshedToken { access_token })
    }

    pub async fn logout(&self, payload: &RefreshTokenPayload) -> BackendResult<()> {
        let refresh_token = required_string(payload.refresh_token.as_ref(), "delete the authentication")?;

        self.authentications
            .check_availability_token(&refresh_token)
            .await?;
        self.authentications.delete_token(&refresh_token).await?;

        tracing::info!("Refresh token revoked");
        Ok(())
    }
}
