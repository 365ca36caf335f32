//! Patient lookup endpoints
//!
//! The dob_range handler is the only one with parsing of its own: the two
//! query parameters arrive as text and must parse as ISO dates before the
//! storage layer is reached. A malformed date is a client error, not a
//! storage error.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;

use hospq_common::db::Patient;

use crate::{db, AppState};

/// Query parameters for the date-of-birth range filter
#[derive(Debug, Deserialize)]
pub struct DobRangeQuery {
    /// Inclusive lower bound, ISO YYYY-MM-DD
    #[serde(rename = "startDate")]
    pub start_date: String,

    /// Inclusive upper bound, ISO YYYY-MM-DD
    #[serde(rename = "endDate")]
    pub end_date: String,
}

/// GET /api/patients
///
/// Returns all patient records.
pub async fn get_all_patients(
    State(state): State<AppState>,
) -> Result<Json<Vec<Patient>>, PatientError> {
    let patients = db::all_patients(&state.db)
        .await
        .map_err(|e| PatientError::DatabaseError(e.to_string()))?;
    Ok(Json(patients))
}

/// GET /api/patient/:patient_id
///
/// Returns the matching patient record, or null when no record has that id.
pub async fn get_patient_by_id(
    State(state): State<AppState>,
    Path(patient_id): Path<i64>,
) -> Result<Json<Option<Patient>>, PatientError> {
    let patient = db::patient_by_id(&state.db, patient_id)
        .await
        .map_err(|e| PatientError::DatabaseError(e.to_string()))?;
    Ok(Json(patient))
}

/// GET /api/patients/dob_range?startDate=YYYY-MM-DD&endDate=YYYY-MM-DD
///
/// Returns patients born within the range, inclusive on both bounds.
pub async fn get_patients_by_dob_range(
    State(state): State<AppState>,
    Query(query): Query<DobRangeQuery>,
) -> Result<Json<Vec<Patient>>, PatientError> {
    let start = parse_date(&query.start_date)?;
    let end = parse_date(&query.end_date)?;

    let patients = db::patients_by_dob_range(&state.db, start, end)
        .await
        .map_err(|e| PatientError::DatabaseError(e.to_string()))?;
    Ok(Json(patients))
}

/// GET /api/patients/department/:department
///
/// Returns patients whose admitting staff member belongs to the department.
/// Patients with no admitting staff member never appear.
pub async fn get_patients_by_department(
    State(state): State<AppState>,
    Path(department): Path<String>,
) -> Result<Json<Vec<Patient>>, PatientError> {
    let patients = db::patients_by_admitting_department(&state.db, &department)
        .await
        .map_err(|e| PatientError::DatabaseError(e.to_string()))?;
    Ok(Json(patients))
}

/// GET /api/patients/doctor_status_off
///
/// Returns patients whose admitting staff member has status "OFF".
pub async fn get_patients_with_doctor_off(
    State(state): State<AppState>,
) -> Result<Json<Vec<Patient>>, PatientError> {
    let patients = db::patients_with_doctor_off(&state.db)
        .await
        .map_err(|e| PatientError::DatabaseError(e.to_string()))?;
    Ok(Json(patients))
}

fn parse_date(value: &str) -> Result<NaiveDate, PatientError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| PatientError::InvalidDate(value.to_string()))
}

/// Patient endpoint errors
#[derive(Debug)]
pub enum PatientError {
    /// Date parameter that is not a valid ISO date
    InvalidDate(String),
    DatabaseError(String),
}

impl IntoResponse for PatientError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            PatientError::InvalidDate(value) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid date (expected YYYY-MM-DD): {}", value),
            ),
            PatientError::DatabaseError(msg) => (
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
