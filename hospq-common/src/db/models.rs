//! Record models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One hospital staff member
///
/// Ids are assigned externally; this layer never generates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Staff {
    pub id: i64,
    pub department: String,
    pub name: String,
    pub status: String,
}

/// One admitted patient
///
/// `admitted_by` holds the id of the admitting staff member, or NULL when no
/// staff member is recorded. Serialized field names mirror the wire format
/// (`dateOfBirth`, `admittedBy`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: i64,
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub admitted_by: Option<i64>,
}
