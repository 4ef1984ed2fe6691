//! Parameterized statement construction
//!
//! The builder resolves a logical table key, validates the record against
//! the table's schema, and emits one SQL statement with `$n` positional
//! placeholders. Values never appear in the SQL text.
//!
//! # Construction Flow (strict order)
//!
//! 1. Resolve the schema; unknown key aborts
//! 2. Partition the record into valid / invalid / missing
//! 3. Apply the strictness gate (inserts are always strict)
//! 4. Project valid columns in schema-declared order
//! 5. Number placeholders `$1..$n` in that same order
//! 6. Emit the statement shape for the operation kind
//!
//! The projection order makes construction deterministic: the same
//! logical record yields byte-identical SQL regardless of the input
//! record's key order.

use serde_json::{Map, Value};

use crate::schema::{validate, SchemaRegistry};

use super::errors::{QueryError, QueryResult};
use super::operation::Operation;
use super::result::BuiltQuery;

/// Stateless statement builder over a schema registry.
///
/// Reentrant; safe to share across any number of concurrent callers.
pub struct QueryBuilder<'a> {
    registry: &'a SchemaRegistry,
}

impl<'a> QueryBuilder<'a> {
    /// Creates a builder backed by the given registry
    pub fn new(registry: &'a SchemaRegistry) -> Self {
        Self { registry }
    }

    /// Builds a parameterized statement for the given operation.
    ///
    /// `strict` requires every declared column to be present and
    /// correctly typed; inserts are strict regardless of the flag. In
    /// non-strict builds the leftover `missing`/`invalid` partitions ride
    /// along on the result.
    ///
    /// # Errors
    ///
    /// - `UnknownTable` if the key is not registered
    /// - `Validation` if the strictness gate rejects the record
    /// - `EmptyColumnSet` if no declared column survived validation
    pub fn build(
        &self,
        operation: Operation,
        table_key: &str,
        record: &Map<String, Value>,
        strict: bool,
    ) -> QueryResult<BuiltQuery> {
        let schema = self
            .registry
            .resolve(table_key)
            .map_err(|_| QueryError::UnknownTable {
                key: table_key.to_string(),
            })?;

        let report = validate(schema, record);

        if (strict || operation.is_always_strict()) && !report.is_ok() {
            return Err(QueryError::Validation { report });
        }

        // Project in schema order, not record order
        let (valid, invalid, missing) = report.into_partitions();
        let mut columns: Vec<&str> = Vec::with_capacity(valid.len());
        let mut params: Vec<Value> = Vec::with_capacity(valid.len());
        for col in schema.columns() {
            if let Some(value) = valid.get(&col.name) {
                columns.push(col.name.as_str());
                params.push(value.clone());
            }
        }

        if columns.is_empty() {
            return Err(QueryError::EmptyColumnSet {
                operation,
                table: schema.sql_name().to_string(),
            });
        }

        let statement = match operation {
            Operation::Insert => format!(
                "INSERT INTO {} ({}) VALUES ({}) RETURNING *;",
                schema.sql_name(),
                columns.join(", "),
                placeholders(columns.len()).join(", "),
            ),
            Operation::Select => format!(
                "SELECT * FROM {} WHERE {};",
                schema.sql_name(),
                bindings(&columns).join(" AND "),
            ),
            Operation::Update => format!(
                "UPDATE {} SET {} RETURNING *;",
                schema.sql_name(),
                bindings(&columns).join(", "),
            ),
            Operation::Delete => format!(
                "DELETE FROM {} WHERE {} RETURNING *;",
                schema.sql_name(),
                bindings(&columns).join(" AND "),
            ),
        };

        Ok(BuiltQuery {
            statement,
            params,
            table: schema.sql_name().to_string(),
            missing,
            invalid,
        })
    }

    /// Builds from a wire kind string (`insert`/`select`/`update`/
    /// `delete`), rejecting unknown kinds as `Invalid type`.
    pub fn build_from_kind(
        &self,
        kind: &str,
        table_key: &str,
        record: &Map<String, Value>,
        strict: bool,
    ) -> QueryResult<BuiltQuery> {
        let operation = Operation::parse(kind)?;
        self.build(operation, table_key, record, strict)
    }
}

/// `$1..$n` placeholder markers
fn placeholders(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("${}", i)).collect()
}

/// `col=$n` pairs in column order
fn bindings(columns: &[&str]) -> Vec<String> {
    columns
        .iter()
        .enumerate()
        .map(|(i, col)| format!("{}=${}", col, i + 1))
        .collect()
}
