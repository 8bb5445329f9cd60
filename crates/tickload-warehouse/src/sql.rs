//! SQL statement and literal rendering.
//!
//! Statements are sent as text, so every value is rendered as a literal.
//! Identifiers are restricted to unquoted names, which the warehouse folds
//! to uppercase.

use serde_json::Value;
use tickload_types::{Cell, ConfigError, FieldType, RUN_DATE_FIELD, Row, Schema};

/// A fully qualified `<database>.<schema>.<table>` reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableRef {
    database: String,
    schema: String,
    table: String,
}

impl TableRef {
    /// Creates a table reference from plain identifiers.
    ///
    /// # Errors
    ///
    /// Returns an error if any part is not a valid unquoted identifier.
    pub fn new(database: &str, schema: &str, table: &str) -> Result<Self, ConfigError> {
        for (key, value) in [("database", database), ("schema", schema), ("table", table)] {
            if !is_identifier(value) {
                return Err(ConfigError::Invalid {
                    key: key.to_string(),
                    reason: format!("'{value}' is not an unquoted identifier"),
                });
            }
        }
        Ok(Self {
            database: database.to_string(),
            schema: schema.to_string(),
            table: table.to_string(),
        })
    }
}

impl std::fmt::Display for TableRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.database, self.schema, self.table)
    }
}

/// Returns true for `[A-Za-z_][A-Za-z0-9_$]*`.
#[must_use]
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// `CREATE TABLE IF NOT EXISTS` with the schema's declared column types.
#[must_use]
pub fn create_table(table: &TableRef, schema: &Schema) -> String {
    let columns: Vec<String> = schema
        .fields()
        .iter()
        .map(|f| format!("    {} {}", f.column(), f.ty()))
        .collect();
    format!(
        "CREATE TABLE IF NOT EXISTS {table} (\n{}\n)",
        columns.join(",\n")
    )
}

/// Adds the run date column to tables created before it existed.
#[must_use]
pub fn add_run_date_column(table: &TableRef, schema: &Schema) -> Option<String> {
    let field = schema.field(RUN_DATE_FIELD)?;
    Some(format!(
        "ALTER TABLE {table} ADD COLUMN IF NOT EXISTS {} {}",
        field.column(),
        field.ty()
    ))
}

/// Removes every row from the table.
#[must_use]
pub fn truncate(table: &TableRef) -> String {
    format!("TRUNCATE TABLE IF EXISTS {table}")
}

/// Multi-row `INSERT` of projected rows, columns uppercased in schema order.
#[must_use]
pub fn insert(table: &TableRef, schema: &Schema, rows: &[Row<'_>]) -> String {
    let columns: Vec<String> = schema.fields().iter().map(|f| f.column()).collect();
    let tuples: Vec<String> = rows
        .iter()
        .map(|row| {
            let values: Vec<String> = schema
                .fields()
                .iter()
                .zip(row.cells())
                .map(|(field, cell)| literal(cell, field.ty()))
                .collect();
            format!("({})", values.join(", "))
        })
        .collect();
    format!(
        "INSERT INTO {table} ({}) VALUES {}",
        columns.join(", "),
        tuples.join(", ")
    )
}

/// Renders a cell as a literal for a column of type `ty`.
///
/// An empty cell is `''` in text columns and `NULL` in typed ones, where an
/// empty string does not cast.
#[must_use]
pub fn literal(cell: &Cell<'_>, ty: FieldType) -> String {
    match (cell, ty) {
        (Cell::Null, _) | (Cell::Empty, FieldType::Boolean | FieldType::TimestampNtz) => {
            "NULL".to_string()
        }
        (Cell::Value(Value::Bool(b)), FieldType::Boolean) => {
            if *b { "TRUE" } else { "FALSE" }.to_string()
        }
        (Cell::Empty | Cell::Value(_), _) => quote(&cell.as_text()),
    }
}

/// Single-quotes a string, escaping backslashes and quotes.
#[must_use]
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("''"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}
