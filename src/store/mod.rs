//! Store façade for deckdb
//!
//! Glues the query builder to a pluggable statement executor. The store
//! builds one statement per call, hands it to the executor verbatim, and
//! logs execution failures. No database driver lives here; the executor
//! is the seam the persistence layer implements.

mod errors;

pub use errors::{ExecutorError, StoreError, StoreResult};

use serde_json::{Map, Value};

use crate::observability::Logger;
use crate::query::{Operation, QueryBuilder};
use crate::schema::SchemaRegistry;

/// Executes a parameterized SQL statement against some backend.
///
/// `params` bind to the statement's `$n` placeholders in order. Returns
/// the resulting rows as JSON objects.
pub trait StatementExecutor {
    /// Runs the statement, returning result rows
    fn execute(&mut self, statement: &str, params: &[Value]) -> Result<Vec<Value>, ExecutorError>;
}

/// Thin store over a registry and an executor.
///
/// Each call builds a statement through the query builder and executes
/// it. Builder rejections never reach the executor.
pub struct Store<'a, E> {
    registry: &'a SchemaRegistry,
    executor: E,
}

impl<'a, E: StatementExecutor> Store<'a, E> {
    /// Creates a store over the given registry and executor
    pub fn new(registry: &'a SchemaRegistry, executor: E) -> Self {
        Self { registry, executor }
    }

    /// Builds and executes one statement.
    ///
    /// Inserts are strict regardless of `strict`; see the query builder.
    pub fn run(
        &mut self,
        operation: Operation,
        table_key: &str,
        record: &Map<String, Value>,
        strict: bool,
    ) -> StoreResult<Vec<Value>> {
        let built = QueryBuilder::new(self.registry).build(operation, table_key, record, strict)?;
        match self.executor.execute(&built.statement, &built.params) {
            Ok(rows) => Ok(rows),
            Err(e) => {
                Logger::error(
                    "STATEMENT_FAILED",
                    &[
                        ("operation", operation.name()),
                        ("table", &built.table),
                        ("reason", &e.0),
                    ],
                );
                Err(StoreError::Execution(e))
            }
        }
    }

    /// Inserts a full record (always strict)
    pub fn create(
        &mut self,
        table_key: &str,
        record: &Map<String, Value>,
    ) -> StoreResult<Vec<Value>> {
        self.run(Operation::Insert, table_key, record, true)
    }

    /// Selects rows matching the record's valid columns
    pub fn fetch(
        &mut self,
        table_key: &str,
        record: &Map<String, Value>,
        strict: bool,
    ) -> StoreResult<Vec<Value>> {
        self.run(Operation::Select, table_key, record, strict)
    }

    /// Updates the record's valid columns
    pub fn update(
        &mut self,
        table_key: &str,
        record: &Map<String, Value>,
        strict: bool,
    ) -> StoreResult<Vec<Value>> {
        self.run(Operation::Update, table_key, record, strict)
    }

    /// Deletes rows matching the record's valid columns
    pub fn remove(
        &mut self,
        table_key: &str,
        record: &Map<String, Value>,
        strict: bool,
    ) -> StoreResult<Vec<Value>> {
        self.run(Operation::Delete, table_key, record, strict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::query::QueryError;
    use serde_json::json;

    /// Records every statement it is handed; optionally fails
    struct RecordingExecutor {
        calls: Vec<(String, Vec<Value>)>,
        fail: bool,
    }

    impl RecordingExecutor {
        fn new() -> Self {
            Self {
                calls: Vec::new(),
                fail: false,
            }
        }
    }

    impl StatementExecutor for RecordingExecutor {
        fn execute(
            &mut self,
            statement: &str,
            params: &[Value],
        ) -> Result<Vec<Value>, ExecutorError> {
            self.calls.push((statement.to_string(), params.to_vec()));
            if self.fail {
                Err(ExecutorError::backend("boom"))
            } else {
                Ok(vec![json!({ "ok": true })])
            }
        }
    }

    fn deck_record() -> Map<String, Value> {
        json!({
            "did": "009988",
            "name": "omnath big",
            "email": "bobhill@zendikar.com"
        })
        .as_object()
        .unwrap()
        .clone()
    }

    #[test]
    fn test_create_passes_statement_through_verbatim() {
        let registry = catalog::default_registry().unwrap();
        let mut store = Store::new(&registry, RecordingExecutor::new());

        let rows = store.create(catalog::DECKS, &deck_record()).unwrap();
        assert_eq!(rows.len(), 1);

        let (statement, params) = &store.executor.calls[0];
        assert_eq!(
            statement,
            "INSERT INTO Decks (did, name, email) VALUES ($1, $2, $3) RETURNING *;"
        );
        assert_eq!(params[1], json!("omnath big"));
    }

    #[test]
    fn test_build_failure_never_reaches_executor() {
        let registry = catalog::default_registry().unwrap();
        let mut store = Store::new(&registry, RecordingExecutor::new());

        let incomplete = json!({ "did": "009988" }).as_object().unwrap().clone();
        let err = store.create(catalog::DECKS, &incomplete).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Build(QueryError::Validation { .. })
        ));
        assert!(store.executor.calls.is_empty());
    }

    #[test]
    fn test_unknown_table_surfaces_builder_error() {
        let registry = catalog::default_registry().unwrap();
        let mut store = Store::new(&registry, RecordingExecutor::new());

        let err = store
            .fetch("cardz", &deck_record(), false)
            .unwrap_err();
        assert_eq!(err.to_string(), "Table does not exist");
        assert!(store.executor.calls.is_empty());
    }

    #[test]
    fn test_executor_failure_is_surfaced() {
        let registry = catalog::default_registry().unwrap();
        let mut executor = RecordingExecutor::new();
        executor.fail = true;
        let mut store = Store::new(&registry, executor);

        let err = store.create(catalog::DECKS, &deck_record()).unwrap_err();
        assert!(matches!(err, StoreError::Execution(_)));
        assert_eq!(store.executor.calls.len(), 1);
    }

    #[test]
    fn test_fetch_non_strict_uses_partial_record() {
        let registry = catalog::default_registry().unwrap();
        let mut store = Store::new(&registry, RecordingExecutor::new());

        let partial = json!({ "email": "bobhill@zendikar.com" })
            .as_object()
            .unwrap()
            .clone();
        store.fetch(catalog::DECKS, &partial, false).unwrap();

        let (statement, _) = &store.executor.calls[0];
        assert_eq!(statement, "SELECT * FROM Decks WHERE email=$1;");
    }
}
