//! PostgreSQL tests

mod migrations_test;
mod pg_store_test;
