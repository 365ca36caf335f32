//! Staff table queries

use hospq_common::db::Staff;
use sqlx::SqlitePool;

/// All staff records
pub async fn all_staff(pool: &SqlitePool) -> Result<Vec<Staff>, sqlx::Error> {
    sqlx::query_as::<_, Staff>(
        "SELECT id, department, name, status FROM staff ORDER BY id",
    )
    .fetch_all(pool)
    .await
}

/// Zero or one staff record matching the given id
pub async fn staff_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Staff>, sqlx::Error> {
    sqlx::query_as::<_, Staff>(
        "SELECT id, department, name, status FROM staff WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Staff records whose status equals the given value (exact, case-sensitive)
pub async fn staff_by_status(
    pool: &SqlitePool,
    status: &str,
) -> Result<Vec<Staff>, sqlx::Error> {
    sqlx::query_as::<_, Staff>(
        "SELECT id, department, name, status FROM staff WHERE status = ? ORDER BY id",
    )
    .bind(status)
    .fetch_all(pool)
    .await
}

/// Staff records whose department equals the given value (exact, case-sensitive)
pub async fn staff_by_department(
    pool: &SqlitePool,
    department: &str,
) -> Result<Vec<Staff>, sqlx::Error> {
    sqlx::query_as::<_, Staff>(
        "SELECT id, department, name, status FROM staff WHERE department = ? ORDER BY id",
    )
    .bind(department)
    .fetch_all(pool)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn seeded_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();

        sqlx::query(
            "CREATE TABLE staff (
                id INTEGER PRIMARY KEY,
                department TEXT NOT NULL,
                name TEXT NOT NULL,
                status TEXT NOT NULL
            )",
        )
        .execute(&pool)
        .await
        .unwrap();

        for (id, dept, name, status) in [
            (1i64, "Cardiology", "Dr. A", "OFF"),
            (2, "Neurology", "Dr. B", "ON"),
            (3, "Cardiology", "Dr. C", "ON"),
        ] {
            sqlx::query("INSERT INTO staff (id, department, name, status) VALUES (?, ?, ?, ?)")
                .bind(id)
                .bind(dept)
                .bind(name)
                .bind(status)
                .execute(&pool)
                .await
                .unwrap();
        }

        pool
    }

    #[tokio::test]
    async fn all_staff_returns_every_row_ordered() {
        let pool = seeded_pool().await;
        let staff = all_staff(&pool).await.unwrap();
        assert_eq!(staff.len(), 3);
        assert_eq!(staff[0].id, 1);
        assert_eq!(staff[2].id, 3);
    }

    #[tokio::test]
    async fn staff_by_id_returns_exactly_the_matching_record() {
        let pool = seeded_pool().await;

        let found = staff_by_id(&pool, 2).await.unwrap().unwrap();
        assert_eq!(found.name, "Dr. B");
        assert_eq!(found.department, "Neurology");

        assert!(staff_by_id(&pool, 99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn staff_by_status_is_exact_and_case_sensitive() {
        let pool = seeded_pool().await;

        let off = staff_by_status(&pool, "OFF").await.unwrap();
        assert_eq!(off.len(), 1);
        assert_eq!(off[0].id, 1);

        // Lowercase does not match
        assert!(staff_by_status(&pool, "off").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn staff_by_department_returns_matching_subset() {
        let pool = seeded_pool().await;

        let cardio = staff_by_department(&pool, "Cardiology").await.unwrap();
        assert_eq!(cardio.iter().map(|s| s.id).collect::<Vec<_>>(), vec![1, 3]);

        assert!(staff_by_department(&pool, "Oncology").await.unwrap().is_empty());
    }
}
