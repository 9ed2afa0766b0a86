//! Record store
//!
//! Owns the SQLite connection, materializes a declared schema once,
//! stages records, and commits them atomically. An instance moves
//! through three states: Unpersisted (in caller memory), Pending
//! (after `add`), Persisted (after a successful `commit`). A failed
//! commit drains the staging buffer and leaves the tables untouched.

use std::collections::HashSet;
use std::path::Path;

use rollbook_core::errors::RollbookError;
use rollbook_core::model::Student;
use rollbook_core::schema::TableSchema;
use rusqlite::{Connection, OptionalExtension};
use tracing::{debug, info, warn};

use crate::ddl;
use crate::errors::{
    already_materialized, from_rusqlite, insert_error, not_materialized, Result,
};
use crate::validate;

/// SQLite-backed record store for Student entities
pub struct Store {
    conn: Connection,
    schema: Option<TableSchema>,
    pending: Vec<Student>,
}

impl Store {
    /// Open a store backed by an in-memory SQLite database
    ///
    /// The backing store is ephemeral: it is torn down when the Store
    /// is dropped.
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(from_rusqlite)?;
        Ok(Self::from_conn(conn))
    }

    /// Open a store backed by a SQLite file at the given path
    pub fn at_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path).map_err(from_rusqlite)?;
        Ok(Self::from_conn(conn))
    }

    fn from_conn(conn: Connection) -> Self {
        Self {
            conn,
            schema: None,
            pending: Vec::new(),
        }
    }

    /// Check whether a schema has been materialized into this store
    pub fn is_materialized(&self) -> bool {
        self.schema.is_some()
    }

    /// Materialize a declared schema into the fresh backing store
    ///
    /// Validates the declaration, then executes the rendered DDL.
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if the store is already materialized, or
    /// `SchemaViolation` if the declaration carries duplicate constraint
    /// or index names.
    pub fn materialize(&mut self, schema: &TableSchema) -> Result<()> {
        if self.schema.is_some() {
            return Err(already_materialized());
        }
        validate_declaration(schema)?;

        for statement in ddl::render_schema(schema) {
            self.conn.execute(&statement, []).map_err(from_rusqlite)?;
        }
        info!(table = %schema.table, "schema materialized");

        self.schema = Some(schema.clone());
        Ok(())
    }

    /// Stage one or more records for insertion
    ///
    /// No validation and no id assignment happen here; staged records
    /// stay Pending until the next `commit`.
    pub fn add(&mut self, records: impl IntoIterator<Item = Student>) -> Result<()> {
        if self.schema.is_none() {
            return Err(not_materialized("add"));
        }
        let before = self.pending.len();
        self.pending.extend(records);
        debug!(
            staged = self.pending.len() - before,
            pending = self.pending.len(),
            "records staged"
        );
        Ok(())
    }

    /// Number of records currently staged
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Validate and persist all staged records atomically
    ///
    /// On success every record is inserted inside a single transaction
    /// and assigned a fresh id in insertion order; the persisted records
    /// are returned with their ids set. On failure nothing is written,
    /// the staging buffer is drained, and the error names the violated
    /// constraint and the offending record.
    pub fn commit(&mut self) -> Result<Vec<Student>> {
        let table = match &self.schema {
            Some(schema) => schema.table.clone(),
            None => return Err(not_materialized("commit")),
        };

        // Staged instances leave the Pending state regardless of outcome.
        let mut batch = std::mem::take(&mut self.pending);

        let persisted_emails = self.persisted_emails(&table)?;
        if let Err(err) = validate::validate_batch(&batch, &persisted_emails) {
            warn!(code = err.code(), "commit rejected");
            return Err(err);
        }

        let tx = self.conn.transaction().map_err(from_rusqlite)?;
        for record in batch.iter_mut() {
            if record.enrolled_date.is_none() {
                record.enrolled_date = Some(chrono::Utc::now());
            }
            let insert = tx.execute(
                &format!(
                    "INSERT INTO {} (name, email, grade, birthday, enrolled_date)
                     VALUES (?1, ?2, ?3, ?4, ?5)",
                    table
                ),
                rusqlite::params![
                    record.name,
                    record.email,
                    record.grade,
                    record.birthday.map(|d| d.timestamp()),
                    record.enrolled_date.map(|d| d.timestamp()),
                ],
            );
            match insert {
                // Dropping the transaction on the error path rolls back
                // every insert made so far.
                Err(err) => return Err(insert_error(err, record)),
                Ok(_) => record.id = Some(tx.last_insert_rowid()),
            }
        }
        tx.commit().map_err(from_rusqlite)?;

        info!(count = batch.len(), "records persisted");
        Ok(batch)
    }

    /// Count of durably persisted records
    pub fn record_count(&self) -> Result<i64> {
        let table = self.table_name("record_count")?;
        self.conn
            .query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
                row.get(0)
            })
            .map_err(from_rusqlite)
    }

    /// List all persisted records ordered by id
    pub fn list_students(&self) -> Result<Vec<Student>> {
        let table = self.table_name("list_students")?;
        let mut stmt = self
            .conn
            .prepare(&format!(
                "SELECT id, name, email, grade, birthday, enrolled_date
                 FROM {} ORDER BY id",
                table
            ))
            .map_err(from_rusqlite)?;

        let students = stmt
            .query_map([], row_to_student)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(students)
    }

    /// Get a persisted record by id
    pub fn get_student(&self, id: i64) -> Result<Option<Student>> {
        let table = self.table_name("get_student")?;
        self.conn
            .query_row(
                &format!(
                    "SELECT id, name, email, grade, birthday, enrolled_date
                     FROM {} WHERE id = ?1",
                    table
                ),
                [id],
                row_to_student,
            )
            .optional()
            .map_err(from_rusqlite)
    }

    fn table_name(&self, op: &str) -> Result<&str> {
        self.schema
            .as_ref()
            .map(|s| s.table.as_str())
            .ok_or_else(|| not_materialized(op))
    }

    fn persisted_emails(&self, table: &str) -> Result<HashSet<String>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT email FROM {}", table))
            .map_err(from_rusqlite)?;
        let emails = stmt
            .query_map([], |row| row.get(0))
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<HashSet<String>, _>>()
            .map_err(from_rusqlite)?;
        Ok(emails)
    }
}

fn row_to_student(row: &rusqlite::Row<'_>) -> rusqlite::Result<Student> {
    let birthday: Option<i64> = row.get(4)?;
    let enrolled_date: Option<i64> = row.get(5)?;
    Ok(Student {
        id: Some(row.get(0)?),
        name: row.get(1)?,
        email: row.get(2)?,
        grade: row.get(3)?,
        birthday: birthday.and_then(|t| chrono::DateTime::from_timestamp(t, 0)),
        enrolled_date: enrolled_date.and_then(|t| chrono::DateTime::from_timestamp(t, 0)),
    })
}

/// Check a declaration for conflicting constraint and index names
fn validate_declaration(schema: &TableSchema) -> Result<()> {
    let mut seen: HashSet<&str> = HashSet::new();
    for constraint in &schema.constraints {
        if !seen.insert(constraint.name()) {
            return Err(RollbookError::SchemaViolation {
                constraint: constraint.name().to_string(),
                reason: "duplicate constraint name".to_string(),
            });
        }
    }
    for index in &schema.indexes {
        if !seen.insert(index.name.as_str()) {
            return Err(RollbookError::SchemaViolation {
                constraint: index.name.clone(),
                reason: "index name collides with another declaration".to_string(),
            });
        }
    }
    Ok(())
}
