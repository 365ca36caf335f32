//! Patient table queries, including the two staff-join shapes

use chrono::NaiveDate;
use hospq_common::db::Patient;
use sqlx::SqlitePool;

/// All patient records
pub async fn all_patients(pool: &SqlitePool) -> Result<Vec<Patient>, sqlx::Error> {
    sqlx::query_as::<_, Patient>(
        "SELECT id, name, date_of_birth, admitted_by FROM patients ORDER BY id",
    )
    .fetch_all(pool)
    .await
}

/// Zero or one patient record matching the given id
pub async fn patient_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Patient>, sqlx::Error> {
    sqlx::query_as::<_, Patient>(
        "SELECT id, name, date_of_birth, admitted_by FROM patients WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Patients born between start and end, inclusive on both bounds
///
/// Dates are stored as ISO-8601 TEXT, so SQLite's lexicographic comparison
/// matches calendar order.
pub async fn patients_by_dob_range(
    pool: &SqlitePool,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<Patient>, sqlx::Error> {
    sqlx::query_as::<_, Patient>(
        "SELECT id, name, date_of_birth, admitted_by FROM patients
         WHERE date_of_birth >= ? AND date_of_birth <= ?
         ORDER BY id",
    )
    .bind(start)
    .bind(end)
    .fetch_all(pool)
    .await
}

/// Patients whose admitting staff member belongs to the given department
///
/// Inner join: patients with a NULL or dangling admitted_by are excluded.
pub async fn patients_by_admitting_department(
    pool: &SqlitePool,
    department: &str,
) -> Result<Vec<Patient>, sqlx::Error> {
    sqlx::query_as::<_, Patient>(
        "SELECT p.id, p.name, p.date_of_birth, p.admitted_by
         FROM patients p
         JOIN staff e ON p.admitted_by = e.id
         WHERE e.department = ?
         ORDER BY p.id",
    )
    .bind(department)
    .fetch_all(pool)
    .await
}

/// Patients whose admitting staff member currently has status 'OFF'
pub async fn patients_with_doctor_off(pool: &SqlitePool) -> Result<Vec<Patient>, sqlx::Error> {
    sqlx::query_as::<_, Patient>(
        "SELECT p.id, p.name, p.date_of_birth, p.admitted_by
         FROM patients p
         JOIN staff e ON p.admitted_by = e.id
         WHERE e.status = 'OFF'
         ORDER BY p.id",
    )
    .fetch_all(pool)
    .await
}
