//! Database migration tests
//!
//! Tests to ensure migrations run correctly and database schema is valid.
//! Run with `DATABASE_URL=... cargo test -- --ignored`.

use serial_test::serial;

use crate::common::database::{create_test_pool, database_url, run_migrations};

#[tokio::test]
#[serial]
#[ignore = "requires DATABASE_URL"]
async fn test_migrations_run_successfully() {
    let Some(url) = database_url() else { return };
    let pool = create_test_pool(&url).await;
    let result = run_migrations(&pool).await;
    assert!(result.is_ok(), "Migrations should run successfully: {:?}", result.err());
}

#[tokio::test]
#[serial]
#[ignore = "requires DATABASE_URL"]
async fn test_forum_tables_exist() {
    let Some(url) = database_url() else { return };
    let pool = create_test_pool(&url).await;
    run_migrations(&pool).await.unwrap();

    for table in ["users", "authentications", "threads", "comments", "replies", "likes"] {
        let result = sqlx::query(&format!("SELECT 1 FROM {} LIMIT 1", table))
            .execute(&pool)
            .await;
        assert!(result.is_ok(), "{} table should exist", table);
    }
}
