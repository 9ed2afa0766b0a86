//! Error helpers for rollbook-store
//!
//! Wraps rusqlite failures into the canonical taxonomy

use rollbook_core::errors::RollbookError;
use rollbook_core::model::Student;

/// Result type alias using RollbookError
pub type Result<T> = std::result::Result<T, RollbookError>;

/// Create a persistence error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> RollbookError {
    RollbookError::Persistence {
        message: err.to_string(),
    }
}

/// Create a configuration error for an operation on an unmaterialized store
pub fn not_materialized(op: &str) -> RollbookError {
    RollbookError::Configuration {
        reason: format!("store is not materialized (operation '{}')", op),
    }
}

/// Create a configuration error for a second materialization attempt
pub fn already_materialized() -> RollbookError {
    RollbookError::Configuration {
        reason: "store is already materialized".to_string(),
    }
}

/// Map an insert failure to the taxonomy
///
/// Database-level constraint failures (the declared UNIQUE/CHECK backstop)
/// become ConstraintViolation; anything else is a persistence error.
pub fn insert_error(err: rusqlite::Error, record: &Student) -> RollbookError {
    match &err {
        rusqlite::Error::SqliteFailure(failure, _)
            if failure.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            RollbookError::ConstraintViolation {
                constraint: "database".to_string(),
                record: record.to_string(),
                reason: err.to_string(),
            }
        }
        _ => from_rusqlite(err),
    }
}
