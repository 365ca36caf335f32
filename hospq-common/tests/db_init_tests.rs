//! Tests for database initialization and read-only connection behavior

use hospq_common::db::{connect_readonly, init_database};
use std::path::PathBuf;

#[tokio::test]
async fn test_database_creation_when_missing() {
    let test_db = format!("/tmp/hospq-test-db-{}.db", std::process::id());
    let db_path = PathBuf::from(&test_db);

    // Ensure database doesn't exist
    let _ = std::fs::remove_file(&db_path);

    let result = init_database(&db_path).await;
    assert!(result.is_ok(), "Database initialization failed: {:?}", result.err());

    // Verify database file was created
    assert!(db_path.exists(), "Database file was not created");

    let _ = std::fs::remove_file(&db_path);
}

#[tokio::test]
async fn test_database_opens_existing() {
    let test_db = format!("/tmp/hospq-test-db-existing-{}.db", std::process::id());
    let db_path = PathBuf::from(&test_db);

    let _ = std::fs::remove_file(&db_path);

    // Create database first time
    let pool1 = init_database(&db_path).await;
    assert!(pool1.is_ok());

    // Open database second time (should succeed)
    let pool2 = init_database(&db_path).await;
    assert!(pool2.is_ok(), "Failed to open existing database: {:?}", pool2.err());

    drop(pool1);
    drop(pool2);
    let _ = std::fs::remove_file(&db_path);
}

#[tokio::test]
async fn test_schema_tables_and_indexes_created() {
    let test_db = format!("/tmp/hospq-test-db-schema-{}.db", std::process::id());
    let db_path = PathBuf::from(&test_db);

    let _ = std::fs::remove_file(&db_path);

    let pool = init_database(&db_path).await.unwrap();

    let tables: Vec<String> = sqlx::query_scalar(
        "SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert!(tables.contains(&"staff".to_string()), "staff table missing: {:?}", tables);
    assert!(tables.contains(&"patients".to_string()), "patients table missing: {:?}", tables);

    let indexes: Vec<String> = sqlx::query_scalar(
        "SELECT name FROM sqlite_master WHERE type = 'index' AND name LIKE 'idx_%'",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert!(indexes.contains(&"idx_staff_status".to_string()));
    assert!(indexes.contains(&"idx_staff_department".to_string()));
    assert!(indexes.contains(&"idx_patients_date_of_birth".to_string()));
    assert!(indexes.contains(&"idx_patients_admitted_by".to_string()));

    drop(pool);
    let _ = std::fs::remove_file(&db_path);
}

#[tokio::test]
async fn test_readonly_connection_rejects_writes() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("hospq.db");

    // Create the schema, then reopen read-only
    let rw = init_database(&db_path).await.unwrap();
    rw.close().await;

    let pool = connect_readonly(&db_path)
        .await
        .expect("Should connect in read-only mode");

    let result = sqlx::query("INSERT INTO staff (id, department, name, status) VALUES (1, 'x', 'y', 'ON')")
        .execute(&pool)
        .await;

    assert!(result.is_err(), "Write operation should fail in read-only mode");
}

#[tokio::test]
async fn test_readonly_connection_requires_existing_database() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("missing.db");

    let result = connect_readonly(&db_path).await;
    assert!(result.is_err(), "Connecting to a missing database should fail");
}
