use thiserror::Error;

/// Result type alias using RollbookError
pub type Result<T> = std::result::Result<T, RollbookError>;

/// Canonical error taxonomy for rollbook operations
///
/// Each variant maps to a stable error code that can be used for
/// programmatic handling and test assertions.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RollbookError {
    /// Conflicting schema declarations, detected at materialization
    #[error("Schema violation in constraint '{constraint}': {reason}")]
    SchemaViolation { constraint: String, reason: String },

    /// A staged record failed a schema constraint at commit
    #[error("Constraint '{constraint}' violated by {record}: {reason}")]
    ConstraintViolation {
        constraint: String,
        record: String,
        reason: String,
    },

    /// The store was used before materialization, or materialized twice
    #[error("Configuration error: {reason}")]
    Configuration { reason: String },

    /// Underlying SQLite failure
    #[error("Persistence error: {message}")]
    Persistence { message: String },
}

impl RollbookError {
    /// Get the stable error code for this error
    pub fn code(&self) -> &'static str {
        match self {
            RollbookError::SchemaViolation { .. } => "ERR_SCHEMA_VIOLATION",
            RollbookError::ConstraintViolation { .. } => "ERR_CONSTRAINT_VIOLATION",
            RollbookError::Configuration { .. } => "ERR_CONFIGURATION",
            RollbookError::Persistence { .. } => "ERR_PERSISTENCE",
        }
    }

    /// Name of the violated constraint, if this is a data or schema error
    pub fn constraint(&self) -> Option<&str> {
        match self {
            RollbookError::SchemaViolation { constraint, .. }
            | RollbookError::ConstraintViolation { constraint, .. } => Some(constraint),
            _ => None,
        }
    }
}
