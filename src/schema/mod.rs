//! Schema subsystem for deckdb
//!
//! Declares, per logical table, the recognized columns and their primitive
//! types, and validates untyped records against those declarations.
//!
//! # Design Principles
//!
//! - Schemas are immutable after registration
//! - Column order is declaration order, everywhere
//! - No nulls, defaults, or coercion
//! - Unknown table keys resolve to an error, never a sentinel
//! - Deterministic validation

mod errors;
mod registry;
mod types;
mod validator;

pub use errors::{SchemaError, SchemaResult};
pub use registry::SchemaRegistry;
pub use types::{ColumnDef, ColumnType, TableSchema};
pub use validator::{validate, ValidationReport};
