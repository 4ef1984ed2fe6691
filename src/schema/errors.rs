//! Schema error types

use thiserror::Error;

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors raised by schema registration and resolution
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SchemaError {
    /// Table key is not registered.
    ///
    /// The message is the exact string callers surface to clients, so it
    /// carries no key; the key is available on the variant itself.
    #[error("Table does not exist")]
    UnknownTable {
        /// The unrecognized logical key
        key: String,
    },

    /// Schema failed structural validation at registration time
    #[error("invalid schema for table '{table}': {reason}")]
    InvalidSchema {
        /// SQL table name (or logical key when the name is unusable)
        table: String,
        /// Human-readable structural violation
        reason: String,
    },

    /// A schema is already registered under this key
    #[error("table key '{key}' is already registered")]
    DuplicateTable {
        /// The colliding logical key
        key: String,
    },

    /// Catalog document could not be read or parsed
    #[error("malformed catalog: {0}")]
    MalformedCatalog(String),
}

impl SchemaError {
    /// Unknown-table constructor
    pub fn unknown_table(key: impl Into<String>) -> Self {
        SchemaError::UnknownTable { key: key.into() }
    }
}
