//! HTTP API handlers for hospq-rq

pub mod health;
pub mod patients;
pub mod staff;

pub use health::health_routes;
pub use patients::{
    get_all_patients, get_patient_by_id, get_patients_by_department,
    get_patients_by_dob_range, get_patients_with_doctor_off,
};
pub use staff::{
    get_all_doctors, get_doctor_by_id, get_doctors_by_department, get_doctors_by_status,
};
