//! Authentication Handlers Module
//!
//! ```text
//! handlers/
//! ├── mod.rs              - Handler exports
//! ├── register.rs         - POST /users
//! └── authentications.rs  - POST, PUT, DELETE /authentications
//! ```

/// Registration handler
pub mod register;

/// Login, refresh and logout handlers
pub mod authentications;

pub use authentications::{login, logout, refresh_authentication};
pub use register::register_user;
