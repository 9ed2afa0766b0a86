//! Declarative table schema
//!
//! A schema is plain data: column descriptors plus named constraint and
//! index descriptors. Declaring a schema has no side effects; conflicts
//! (for example duplicate constraint names) are surfaced by the store at
//! materialization time.

use serde::{Deserialize, Serialize};

// Canonical constraint and index names for the Student table
pub const CONSTRAINT_ID_PK: &str = "id_pk";
pub const CONSTRAINT_UNIQUE_EMAIL: &str = "unique_email";
pub const CONSTRAINT_GRADE_RANGE: &str = "grade_between_1_and_12";
pub const CONSTRAINT_EMAIL_LENGTH: &str = "email_length";
pub const INDEX_NAME: &str = "index_name";

/// Maximum length of the email column, in characters
pub const EMAIL_MAX_LEN: u32 = 55;

/// Inclusive grade bounds enforced at commit
pub const GRADE_MIN: i32 = 1;
pub const GRADE_MAX: i32 = 12;

/// Column value type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnType {
    Integer,
    Text { max_len: Option<u32> },
    Timestamp,
}

/// A single column declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDef {
    pub name: String,
    pub ty: ColumnType,
}

impl ColumnDef {
    pub fn new(name: impl Into<String>, ty: ColumnType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// A named table-level constraint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableConstraint {
    PrimaryKey { name: String, column: String },
    Unique { name: String, column: String },
    Check { name: String, expr: String },
}

impl TableConstraint {
    /// The declared constraint name
    pub fn name(&self) -> &str {
        match self {
            TableConstraint::PrimaryKey { name, .. }
            | TableConstraint::Unique { name, .. }
            | TableConstraint::Check { name, .. } => name,
        }
    }
}

/// A named secondary index on a single column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexDef {
    pub name: String,
    pub column: String,
}

/// Full declaration of one table: columns, constraints, and indexes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSchema {
    pub table: String,
    pub columns: Vec<ColumnDef>,
    pub constraints: Vec<TableConstraint>,
    pub indexes: Vec<IndexDef>,
}

/// The canonical Student table declaration
///
/// Mirrors the data model: a store-assigned integer primary key, a
/// unique email capped at 55 characters, a range-checked grade, and a
/// secondary index on name.
pub fn student_table() -> TableSchema {
    TableSchema {
        table: "students".to_string(),
        columns: vec![
            ColumnDef::new("id", ColumnType::Integer),
            ColumnDef::new("name", ColumnType::Text { max_len: None }),
            ColumnDef::new(
                "email",
                ColumnType::Text {
                    max_len: Some(EMAIL_MAX_LEN),
                },
            ),
            ColumnDef::new("grade", ColumnType::Integer),
            ColumnDef::new("birthday", ColumnType::Timestamp),
            ColumnDef::new("enrolled_date", ColumnType::Timestamp),
        ],
        constraints: vec![
            TableConstraint::PrimaryKey {
                name: CONSTRAINT_ID_PK.to_string(),
                column: "id".to_string(),
            },
            TableConstraint::Unique {
                name: CONSTRAINT_UNIQUE_EMAIL.to_string(),
                column: "email".to_string(),
            },
            TableConstraint::Check {
                name: CONSTRAINT_GRADE_RANGE.to_string(),
                expr: format!("grade BETWEEN {} AND {}", GRADE_MIN, GRADE_MAX),
            },
        ],
        indexes: vec![IndexDef {
            name: INDEX_NAME.to_string(),
            column: "name".to_string(),
        }],
    }
}
