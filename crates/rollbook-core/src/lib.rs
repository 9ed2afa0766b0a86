//! Core domain layer for rollbook
//!
//! This crate provides everything the persistence layer builds on:
//!
//! - **Model**: the `Student` entity
//! - **Schema**: declarative table/constraint/index descriptions
//! - **Errors**: the canonical error taxonomy with stable codes
//! - **Logging**: tracing subscriber initialization

pub mod errors;
pub mod logging;
pub mod model;
pub mod schema;

pub use errors::{Result, RollbookError};
pub use model::Student;
pub use schema::{student_table, ColumnDef, ColumnType, IndexDef, TableConstraint, TableSchema};
