//! Record validation against a table schema
//!
//! Validation partitions the schema's declared columns into three disjoint
//! buckets against an input record:
//!
//! - `missing` — declared but absent from the record
//! - `invalid` — present but carrying the wrong type tag
//! - `valid` — present and correctly typed
//!
//! Fields in the record that the schema does not declare are ignored; they
//! appear in no bucket. Validation is deterministic, performs no coercion,
//! and never mutates the record.

use std::collections::BTreeMap;
use std::fmt;

use serde_json::{Map, Value};

use super::types::{ColumnType, TableSchema};

/// Three-way partition of a schema's declared columns against a record.
///
/// The union of the three buckets is exactly the declared column set, and
/// the buckets are pairwise disjoint. `is_ok` holds iff every declared
/// column landed in `valid`.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationReport {
    valid: BTreeMap<String, Value>,
    invalid: BTreeMap<String, Value>,
    missing: BTreeMap<String, ColumnType>,
    declared: usize,
}

impl ValidationReport {
    /// Correctly typed columns and their values
    pub fn valid(&self) -> &BTreeMap<String, Value> {
        &self.valid
    }

    /// Wrongly typed columns and the offending values
    pub fn invalid(&self) -> &BTreeMap<String, Value> {
        &self.invalid
    }

    /// Absent columns and their expected types
    pub fn missing(&self) -> &BTreeMap<String, ColumnType> {
        &self.missing
    }

    /// Number of correctly typed columns
    pub fn valid_count(&self) -> usize {
        self.valid.len()
    }

    /// Number of wrongly typed columns
    pub fn invalid_count(&self) -> usize {
        self.invalid.len()
    }

    /// Number of absent columns
    pub fn missing_count(&self) -> usize {
        self.missing.len()
    }

    /// True iff every declared column is present and correctly typed
    pub fn is_ok(&self) -> bool {
        self.valid_count() == self.declared
    }

    /// Consumes the report, returning `(valid, invalid, missing)`
    pub fn into_partitions(
        self,
    ) -> (
        BTreeMap<String, Value>,
        BTreeMap<String, Value>,
        BTreeMap<String, ColumnType>,
    ) {
        (self.valid, self.invalid, self.missing)
    }
}

impl fmt::Display for ValidationReport {
    /// Renders only the non-empty partitions, one line each:
    /// `invalid: a, b` / `missing: c` / `valid: d`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines: Vec<String> = Vec::new();
        if !self.invalid.is_empty() {
            lines.push(format!("invalid: {}", join_keys(self.invalid.keys())));
        }
        if !self.missing.is_empty() {
            lines.push(format!("missing: {}", join_keys(self.missing.keys())));
        }
        if !self.valid.is_empty() {
            lines.push(format!("valid: {}", join_keys(self.valid.keys())));
        }
        write!(f, "{}", lines.join("\n"))
    }
}

fn join_keys<'a>(keys: impl Iterator<Item = &'a String>) -> String {
    keys.map(String::as_str).collect::<Vec<_>>().join(", ")
}

/// Validates a record against a schema, partitioning every declared
/// column into valid / invalid / missing.
pub fn validate(schema: &TableSchema, record: &Map<String, Value>) -> ValidationReport {
    let mut valid = BTreeMap::new();
    let mut invalid = BTreeMap::new();
    let mut missing = BTreeMap::new();

    for col in schema.columns() {
        match record.get(&col.name) {
            None => {
                missing.insert(col.name.clone(), col.column_type);
            }
            Some(value) if !col.column_type.matches(value) => {
                invalid.insert(col.name.clone(), value.clone());
            }
            Some(value) => {
                valid.insert(col.name.clone(), value.clone());
            }
        }
    }

    ValidationReport {
        valid,
        invalid,
        missing,
        declared: schema.column_count(),
    }
}
