//! Storage layer for hospq-rq
//!
//! Nine parametrized read-only queries over the staff and patients tables.
//! Every function is one statement delegated to SQLite's planner; results
//! are ordered by id so repeated calls return stable sequences.

mod patients;
mod staff;

pub use patients::{
    all_patients, patient_by_id, patients_by_admitting_department, patients_by_dob_range,
    patients_with_doctor_off,
};
pub use staff::{all_staff, staff_by_department, staff_by_id, staff_by_status};
