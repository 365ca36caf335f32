//! Staff (doctor) lookup endpoints
//!
//! Pure pass-through handlers: each forwards its parameters to one storage
//! query and serializes the result. A by-id miss is 200 with a null body,
//! never an error.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use hospq_common::db::Staff;

use crate::{db, AppState};

/// GET /api/doctors
///
/// Returns all staff records.
pub async fn get_all_doctors(
    State(state): State<AppState>,
) -> Result<Json<Vec<Staff>>, StaffError> {
    let staff = db::all_staff(&state.db)
        .await
        .map_err(|e| StaffError::DatabaseError(e.to_string()))?;
    Ok(Json(staff))
}

/// GET /api/doctor/:employee_id
///
/// Returns the matching staff record, or null when no record has that id.
/// A non-integer id is rejected by the path extractor before this runs.
pub async fn get_doctor_by_id(
    State(state): State<AppState>,
    Path(employee_id): Path<i64>,
) -> Result<Json<Option<Staff>>, StaffError> {
    let staff = db::staff_by_id(&state.db, employee_id)
        .await
        .map_err(|e| StaffError::DatabaseError(e.to_string()))?;
    Ok(Json(staff))
}

/// GET /api/doctors/status/:status
///
/// Returns staff whose status equals the path value (exact, case-sensitive).
pub async fn get_doctors_by_status(
    State(state): State<AppState>,
    Path(status): Path<String>,
) -> Result<Json<Vec<Staff>>, StaffError> {
    let staff = db::staff_by_status(&state.db, &status)
        .await
        .map_err(|e| StaffError::DatabaseError(e.to_string()))?;
    Ok(Json(staff))
}

/// GET /api/doctors/department/:department
///
/// Returns staff whose department equals the path value (exact,
/// case-sensitive).
pub async fn get_doctors_by_department(
    State(state): State<AppState>,
    Path(department): Path<String>,
) -> Result<Json<Vec<Staff>>, StaffError> {
    let staff = db::staff_by_department(&state.db, &department)
        .await
        .map_err(|e| StaffError::DatabaseError(e.to_string()))?;
    Ok(Json(staff))
}

/// Staff endpoint errors
#[derive(Debug)]
pub enum StaffError {
    DatabaseError(String),
}

impl IntoResponse for StaffError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            StaffError::DatabaseError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", msg),
            ),
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
