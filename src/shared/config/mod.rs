//! Application configuration module
//!
//! Provides the server configuration, loaded from environment variables or
//! assembled through [`AppConfigBuilder`].

use thiserror::Error;

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 5000;

/// Default access token lifetime in seconds
pub const DEFAULT_ACCESS_TOKEN_AGE: u64 = 3000;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Interface to bind
    pub host: String,
    /// Port to bind
    pub port: u16,
    /// PostgreSQL connection string; `None` selects the in-memory store
    pub database_url: Option<String>,
    /// HMAC key for access tokens
    pub access_token_key: String,
    /// HMAC key for refresh tokens
    pub refresh_token_key: String,
    /// Access token lifetime in seconds
    pub access_token_age: u64,
    /// bcrypt work factor
    pub bcrypt_cost: u32,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load configuration from the process environment
    ///
    /// Call `dotenv::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut builder = Self::builder();

        if let Ok(host) = std::env::var("HOST") {
            builder = builder.host(host);
        }
        if let Ok(port) = std::env::var("PORT") {
            let port = port.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                key: "PORT",
                value: port.clone(),
            })?;
            builder = builder.port(port);
        }
        if let Ok(url) = std::env::var("DATABASE_URL") {
            if !url.is_empty() {
                builder = builder.database_url(url);
            }
        }

        let access_key =
            std::env::var("ACCESS_TOKEN_KEY").map_err(|_| ConfigError::MissingValue("ACCESS_TOKEN_KEY"))?;
        let refresh_key =
            std::env::var("REFRESH_TOKEN_KEY").map_err(|_| ConfigError::MissingValue("REFRESH_TOKEN_KEY"))?;
        builder = builder.access_token_key(access_key).refresh_token_key(refresh_key);

        if let Ok(age) = std::env::var("ACCESS_TOKEN_AGE") {
            let age = age.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                key: "ACCESS_TOKEN_AGE",
                value: age.clone(),
            })?;
            builder = builder.access_token_age(age);
        }
        if let Ok(cost) = std::env::var("BCRYPT_COST") {
            let cost = cost.parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                key: "BCRYPT_COST",
                value: cost.clone(),
            })?;
            builder = builder.bcrypt_cost(cost);
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.access_token_key.is_empty() {
            return Err(ConfigError::MissingValue("ACCESS_TOKEN_KEY"));
        }
        if self.refresh_token_key.is_empty() {
            return Err(ConfigError::MissingValue("REFRESH_TOKEN_KEY"));
        }
        if self.access_token_age == 0 {
            return Err(ConfigError::InvalidValue {
                key: "ACCESS_TOKEN_AGE",
                value: "0".to_string(),
            });
        }
        if !(4..=31).contains(&self.bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                key: "BCRYPT_COST",
                value: self.bcrypt_cost.to_string(),
            });
        }
        Ok(())
    }

    /// Socket address string for the listener
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Builder for AppConfig
#[derive(Debug)]
pub struct AppConfigBuilder {
    host: String,
    port: u16,
    database_url: Option<String>,
    access_token_key: Option<String>,
    refresh_token_key: Option<String>,
    access_token_age: u64,
    bcrypt_cost: u32,
}

impl Default for AppConfigBuilder {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            database_url: None,
            access_token_key: None,
            refresh_token_key: None,
            access_token_age: DEFAULT_ACCESS_TOKEN_AGE,
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl AppConfigBuilder {
    /// Set the bind host
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the bind port
    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the PostgreSQL connection string
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    /// Set the access token signing key
    pub fn access_token_key(mut self, key: impl Into<String>) -> Self {
        self.access_token_key = Some(key.into());
        self
    }

    /// Set the refresh token signing key
    pub fn refresh_token_key(mut self, key: impl Into<String>) -> Self {
        self.refresh_token_key = Some(key.into());
        self
    }

    /// Set the access token lifetime in seconds
    pub fn access_token_age(mut self, seconds: u64) -> Self {
        self.access_token_age = seconds;
        self
    }

    /// Set the bcrypt work factor
    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = cost;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let config = AppConfig {
            host: self.host,
            port: self.port,
            database_url: self.database_url,
            access_token_key: self
                .access_token_key
                .ok_or(ConfigError::MissingValue("ACCESS_TOKEN_KEY"))?,
            refresh_token_key: self
                .refresh_token_key
                .ok_or(ConfigError::MissingValue("REFRESH_TOKEN_KEY"))?,
            access_token_age: self.access_token_age,
            bcrypt_cost: self.bcrypt_cost,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
    #[error("missing value: {0}")]
    MissingValue(&'static str),
}
