//! DDL rendering
//!
//! Turns a declarative `TableSchema` into executable SQLite statements.
//! Rendering is pure; execution happens in `Store::materialize`.

use rollbook_core::schema::{ColumnDef, ColumnType, TableConstraint, TableSchema};

/// Render the CREATE TABLE and CREATE INDEX statements for a schema
pub fn render_schema(schema: &TableSchema) -> Vec<String> {
    let mut statements = vec![render_create_table(schema)];
    for index in &schema.indexes {
        statements.push(format!(
            "CREATE INDEX {} ON {} ({})",
            index.name, schema.table, index.column
        ));
    }
    statements
}

fn render_create_table(schema: &TableSchema) -> String {
    let mut parts: Vec<String> = schema.columns.iter().map(render_column).collect();
    parts.extend(schema.constraints.iter().map(render_constraint));
    format!(
        "CREATE TABLE {} (\n    {}\n)",
        schema.table,
        parts.join(",\n    ")
    )
}

fn render_column(column: &ColumnDef) -> String {
    let ty = match &column.ty {
        ColumnType::Integer => "INTEGER".to_string(),
        ColumnType::Text { max_len: None } => "TEXT".to_string(),
        ColumnType::Text { max_len: Some(n) } => format!("VARCHAR({})", n),
        ColumnType::Timestamp => "TIMESTAMP".to_string(),
    };
    format!("{} {}", column.name, ty)
}

fn render_constraint(constraint: &TableConstraint) -> String {
    match constraint {
        TableConstraint::PrimaryKey { name, column } => {
            format!("CONSTRAINT {} PRIMARY KEY ({})", name, column)
        }
        TableConstraint::Unique { name, column } => {
            format!("CONSTRAINT {} UNIQUE ({})", name, column)
        }
        TableConstraint::Check { name, expr } => {
            format!("CONSTRAINT {} CHECK ({})", name, expr)
        }
    }
}
