//! Authentication Module
//!
//! This module handles user registration, login and session management.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - Registration input, UserRepository, PostgreSQL impl
//! ├── sessions.rs     - JWT TokenManager, AuthenticationRepository, PostgreSQL impl
//! ├── service.rs      - Register, login, refresh and logout use cases
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: username, password, fullname → user stored with a bcrypt hash
//! 2. **Login**: username and password verified → access and refresh tokens issued,
//!    refresh token stored
//! 3. **Refresh**: stored refresh token → new access token
//! 4. **Logout**: stored refresh token deleted
//!
//! Access tokens authenticate the forum's write routes through
//! [`crate::backend::middleware::AuthUser`].

/// User data model and database operations
pub mod users;

/// JWT token generation and validation
pub mod sessions;

/// Registration and session use cases
pub mod service;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{login, logout, refresh_authentication, register_user};
pub use service::AuthService;
pub use sessions::{Claims, TokenManager};
