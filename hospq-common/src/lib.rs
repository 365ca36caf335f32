//! # HOSPQ Common Library
//!
//! Shared code for the HOSPQ record-query service:
//! - Database schema initialization and connection helpers
//! - Record models (Staff, Patient)
//! - Configuration loading and root folder resolution
//! - Common error types

pub mod config;
pub mod db;
pub mod error;

pub use error::{Error, Result};
