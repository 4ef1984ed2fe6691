//! Query builder error types
//!
//! The builder is total: every failure for a well-formed input comes back
//! as one of these values, never as a panic.

use thiserror::Error;

use crate::schema::ValidationReport;

use super::operation::Operation;

/// Result type for query construction
pub type QueryResult<T> = Result<T, QueryError>;

/// Errors raised while constructing a statement
#[derive(Debug, Clone, Error, PartialEq)]
pub enum QueryError {
    /// Table key is not registered
    #[error("Table does not exist")]
    UnknownTable {
        /// The unrecognized logical key
        key: String,
    },

    /// Operation kind string is not one of insert/select/update/delete
    #[error("Invalid type")]
    InvalidType {
        /// The rejected kind string
        kind: String,
    },

    /// Strict-mode validation failed; renders the partition summary
    #[error("{report}")]
    Validation {
        /// The full valid/invalid/missing partition
        report: ValidationReport,
    },

    /// No declared column survived validation, so there is nothing to
    /// bind. Emitting SQL here would produce a malformed statement.
    #[error("no valid columns for {operation} on table '{table}'")]
    EmptyColumnSet {
        /// The operation that was requested
        operation: Operation,
        /// The resolved SQL table name
        table: String,
    },
}
