//! Built statement result types

use std::collections::BTreeMap;

use serde_json::Value;

use crate::schema::ColumnType;

/// A fully constructed, parameterized SQL statement.
///
/// Owned by the caller; the builder keeps no state across calls. The
/// parameter order matches the `$n` placeholders in the statement, which
/// in turn follow the schema's declared column order.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltQuery {
    /// SQL text with `$1..$n` positional placeholders
    pub statement: String,
    /// Values bound to the placeholders, in placeholder order
    pub params: Vec<Value>,
    /// Resolved SQL table name
    pub table: String,
    /// Declared columns absent from the record (non-strict builds)
    pub missing: BTreeMap<String, ColumnType>,
    /// Declared columns present with the wrong type (non-strict builds)
    pub invalid: BTreeMap<String, Value>,
}

impl BuiltQuery {
    /// Returns the SQL text
    pub fn statement(&self) -> &str {
        &self.statement
    }

    /// Returns the positional parameters
    pub fn params(&self) -> &[Value] {
        &self.params
    }

    /// True if every declared column was bound
    pub fn fully_bound(&self) -> bool {
        self.missing.is_empty() && self.invalid.is_empty()
    }
}
