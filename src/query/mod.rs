//! Query construction subsystem for deckdb
//!
//! Turns a validated record into one parameterized SQL statement per
//! operation kind.
//!
//! # Invariants
//!
//! - Deterministic: identical inputs yield byte-identical SQL
//! - Positional parameters only; values never appear in the SQL text
//! - Placeholder order follows schema-declared column order
//! - Total: failures are returned values, never panics

mod builder;
mod errors;
mod operation;
mod result;

pub use builder::QueryBuilder;
pub use errors::{QueryError, QueryResult};
pub use operation::Operation;
pub use result::BuiltQuery;
