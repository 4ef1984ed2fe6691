//! Table schema type definitions
//!
//! A table schema declares the recognized columns of one SQL table and the
//! primitive type each column must carry. Column order is fixed when the
//! schema is constructed and every generated statement uses that exact
//! order for positional parameters.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Primitive type tags a column value may carry.
///
/// Values are compared against the tag directly: no coercion, no nulls,
/// no structural inspection of objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// UTF-8 string
    String,
    /// JSON number (integer or float)
    Number,
    /// Boolean
    Boolean,
    /// JSON object
    Object,
}

impl ColumnType {
    /// Returns the type name for error messages and catalog documents
    pub fn type_name(&self) -> &'static str {
        match self {
            ColumnType::String => "string",
            ColumnType::Number => "number",
            ColumnType::Boolean => "boolean",
            ColumnType::Object => "object",
        }
    }

    /// Returns true if the value carries this type tag.
    ///
    /// `null` and arrays match no tag.
    pub fn matches(&self, value: &Value) -> bool {
        matches!(
            (self, value),
            (ColumnType::String, Value::String(_))
                | (ColumnType::Number, Value::Number(_))
                | (ColumnType::Boolean, Value::Bool(_))
                | (ColumnType::Object, Value::Object(_))
        )
    }
}

/// A single column declaration: its SQL name and expected type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDef {
    /// Column name as it appears in generated SQL
    pub name: String,
    /// Expected primitive type
    #[serde(rename = "type")]
    pub column_type: ColumnType,
}

impl ColumnDef {
    /// Creates a new column declaration
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
        }
    }
}

/// Immutable descriptor of one SQL table.
///
/// Constructed once at startup and never mutated afterwards. The column
/// sequence is the declaration order and is the only order generated
/// statements use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSchema {
    /// Table name used in generated SQL
    pub name: String,
    /// Ordered column declarations
    pub columns: Vec<ColumnDef>,
}

impl TableSchema {
    /// Creates a new table schema from ordered column declarations
    pub fn new(name: impl Into<String>, columns: Vec<ColumnDef>) -> Self {
        Self {
            name: name.into(),
            columns,
        }
    }

    /// Returns the SQL table name
    pub fn sql_name(&self) -> &str {
        &self.name
    }

    /// Returns the declared columns in declaration order
    pub fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    /// Returns the number of declared columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Returns the declared type of a column, if the column exists
    pub fn type_of(&self, column: &str) -> Option<ColumnType> {
        self.columns
            .iter()
            .find(|c| c.name == column)
            .map(|c| c.column_type)
    }

    /// Checks structural invariants: non-empty name, at least one column,
    /// no duplicate column names.
    pub fn validate_structure(&self) -> Result<(), String> {
        if self.name.is_empty() {
            return Err("table name must not be empty".to_string());
        }
        if self.columns.is_empty() {
            return Err("table must declare at least one column".to_string());
        }
        for (i, col) in self.columns.iter().enumerate() {
            if col.name.is_empty() {
                return Err("column name must not be empty".to_string());
            }
            if self.columns[..i].iter().any(|c| c.name == col.name) {
                return Err(format!("duplicate column '{}'", col.name));
            }
        }
        Ok(())
    }
}
