//! hospq-rq library - Record Query module
//!
//! Read-only HTTP access to hospital staff and patient records. Each route
//! forwards to exactly one storage query; no handler composes multiple
//! queries or mutates state.

use axum::Router;
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod db;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool (read-only)
    pub db: SqlitePool,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

/// Build application router
///
/// Record routes live under /api; the health endpoint sits outside the
/// prefix so monitoring needs no knowledge of the API surface.
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    let records = Router::new()
        .route("/api/doctors", get(api::get_all_doctors))
        .route("/api/doctor/:employee_id", get(api::get_doctor_by_id))
        .route("/api/doctors/status/:status", get(api::get_doctors_by_status))
        .route(
            "/api/doctors/department/:department",
            get(api::get_doctors_by_department),
        )
        .route("/api/patients", get(api::get_all_patients))
        .route("/api/patient/:patient_id", get(api::get_patient_by_id))
        .route("/api/patients/dob_range", get(api::get_patients_by_dob_range))
        .route(
            "/api/patients/department/:department",
            get(api::get_patients_by_department),
        )
        .route(
            "/api/patients/doctor_status_off",
            get(api::get_patients_with_doctor_off),
        );

    Router::new()
        .merge(records)
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
