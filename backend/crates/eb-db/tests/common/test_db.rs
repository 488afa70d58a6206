use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    eb_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Creates a WAL file pool in `dir` that allows concurrent transactions
pub async fn create_file_pool(dir: &tempfile::TempDir, max_connections: u32) -> SqlitePool {
    let pool = eb_db::create_pool(&dir.path().join("eb.db"), max_connections)
        .await
        .expect("Failed to create file pool");

    eb_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}
