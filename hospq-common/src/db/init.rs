//! Database initialization
//!
//! Record rows are created and mutated by an external data-entry path; this
//! crate only materializes the schema so a fresh deployment (and the test
//! suite) has a database to open. The query service itself connects with
//! `connect_readonly`.

use crate::Result;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use std::path::Path;
use tracing::info;

/// Initialize database connection and create tables if needed
pub async fn init_database(db_path: &Path) -> Result<SqlitePool> {
    let newly_created = !db_path.exists();

    // Create parent directory if it doesn't exist
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect(&db_url)
        .await?;

    if newly_created {
        info!("Initialized new database: {}", db_path.display());
    } else {
        info!("Opened existing database: {}", db_path.display());
    }

    // Enable foreign keys so admitted_by references are checked at write time
    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&pool)
        .await?;

    // WAL mode allows concurrent readers while the external data-entry
    // path holds the writer
    sqlx::query("PRAGMA journal_mode = WAL")
        .execute(&pool)
        .await?;

    sqlx::query("PRAGMA busy_timeout = 5000")
        .execute(&pool)
        .await?;

    // Schema creation is idempotent - safe to call multiple times
    create_staff_table(&pool).await?;
    create_patients_table(&pool).await?;

    Ok(pool)
}

/// Connect to the record database in read-only mode
///
/// The query service never writes, so its connections use SQLite mode=ro.
/// The database must already exist; run the data-entry path (or
/// `init_database`) first.
pub async fn connect_readonly(db_path: &Path) -> Result<SqlitePool> {
    if !db_path.exists() {
        return Err(crate::Error::NotFound(format!(
            "database not found: {}",
            db_path.display()
        )));
    }

    let db_url = format!("sqlite://{}?mode=ro", db_path.display());
    let pool = SqlitePool::connect(&db_url).await?;

    sqlx::query("PRAGMA busy_timeout = 5000")
        .execute(&pool)
        .await?;

    Ok(pool)
}

/// Create the staff table
///
/// Ids are assigned by the external data-entry path, never auto-generated
/// here. Status is free text; "ON" and "OFF" are the values the filter
/// queries care about.
async fn create_staff_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS staff (
            id INTEGER PRIMARY KEY,
            department TEXT NOT NULL,
            name TEXT NOT NULL,
            status TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Indexes for the status/department filter queries
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_staff_status ON staff(status)")
        .execute(pool)
        .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_staff_department ON staff(department)")
        .execute(pool)
        .await?;

    Ok(())
}

/// Create the patients table
///
/// date_of_birth is stored as ISO-8601 TEXT (no time component).
/// admitted_by is nullable; many patients may reference one staff member.
async fn create_patients_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS patients (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            date_of_birth TEXT NOT NULL,
            admitted_by INTEGER REFERENCES staff(id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Index for the dob-range filter and one to accelerate the join
    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_patients_date_of_birth ON patients(date_of_birth)",
    )
    .execute(pool)
    .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_patients_admitted_by ON patients(admitted_by)")
        .execute(pool)
        .await?;

    Ok(())
}
