use eb_db::{create_pool, run_migrations};

use googletest::prelude::*;
use tempfile::TempDir;

#[tokio::test]
async fn given_missing_directory_when_pool_created_then_database_file_exists() {
    // Given
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("eb.db");

    // When
    let pool = create_pool(&path, 2).await.unwrap();
    run_migrations(&pool).await.unwrap();

    // Then
    assert!(path.exists());
    let (mode,): (String,) = sqlx::query_as("PRAGMA journal_mode")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_that!(mode.to_lowercase(), eq("wal"));
}
