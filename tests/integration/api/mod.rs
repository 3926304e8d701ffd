//! API integration tests
//!
//! Integration tests for all API endpoints

mod authentications_test;
mod threads_test;
mod comments_test;
