//! Schema registry: logical table keys mapped to table schemas
//!
//! The registry is populated once at process startup (in code or from a
//! JSON catalog document) and read thereafter. Resolution of an unknown
//! key is an error, not a sentinel: there is no "empty but usable-looking"
//! table object anywhere downstream.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::errors::{SchemaError, SchemaResult};
use super::types::TableSchema;

/// Write-once registry of table schemas, keyed by logical table key.
///
/// The key is the short identifier callers pass around (`"card"`,
/// `"deck"`, ...); the schema carries the SQL table name used in
/// generated statements.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    tables: HashMap<String, TableSchema>,
}

impl SchemaRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self {
            tables: HashMap::new(),
        }
    }

    /// Registers a schema under a logical key.
    ///
    /// The schema is structurally validated here; a registry never holds
    /// an unusable schema. Re-registering a key is an error.
    pub fn define(&mut self, key: impl Into<String>, schema: TableSchema) -> SchemaResult<()> {
        let key = key.into();
        if key.is_empty() {
            return Err(SchemaError::InvalidSchema {
                table: schema.name.clone(),
                reason: "table key must not be empty".to_string(),
            });
        }
        schema
            .validate_structure()
            .map_err(|reason| SchemaError::InvalidSchema {
                table: if schema.name.is_empty() {
                    key.clone()
                } else {
                    schema.name.clone()
                },
                reason,
            })?;
        if self.tables.contains_key(&key) {
            return Err(SchemaError::DuplicateTable { key });
        }
        self.tables.insert(key, schema);
        Ok(())
    }

    /// Resolves a logical key to its schema
    pub fn resolve(&self, key: &str) -> SchemaResult<&TableSchema> {
        self.tables
            .get(key)
            .ok_or_else(|| SchemaError::unknown_table(key))
    }

    /// Returns true if the key is registered
    pub fn contains(&self, key: &str) -> bool {
        self.tables.contains_key(key)
    }

    /// Returns the number of registered tables
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Returns true if no tables are registered
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Returns an iterator over the registered logical keys
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    /// Builds a registry from a JSON catalog document.
    ///
    /// The document maps logical keys to table schemas:
    ///
    /// ```json
    /// { "deck": { "name": "Decks", "columns": [
    ///     { "name": "did", "type": "string" } ] } }
    /// ```
    ///
    /// A malformed document or an invalid schema fails the whole load;
    /// a registry is never partially populated.
    pub fn from_catalog_json(document: &str) -> SchemaResult<Self> {
        let parsed: HashMap<String, TableSchema> = serde_json::from_str(document)
            .map_err(|e| SchemaError::MalformedCatalog(e.to_string()))?;

        let mut registry = Self::new();
        // Insert in sorted key order so the first error is deterministic
        let mut entries: Vec<_> = parsed.into_iter().collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        for (key, schema) in entries {
            registry.define(key, schema)?;
        }
        Ok(registry)
    }

    /// Builds a registry from a JSON catalog file on disk
    pub fn load_catalog_file(path: &Path) -> SchemaResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            SchemaError::MalformedCatalog(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_catalog_json(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::types::{ColumnDef, ColumnType};

    fn deck_schema() -> TableSchema {
        TableSchema::new(
            "Decks",
            vec![
                ColumnDef::new("did", ColumnType::String),
                ColumnDef::new("name", ColumnType::String),
                ColumnDef::new("email", ColumnType::String),
            ],
        )
    }

    #[test]
    fn test_define_and_resolve() {
        let mut registry = SchemaRegistry::new();
        registry.define("deck", deck_schema()).unwrap();

        let schema = registry.resolve("deck").unwrap();
        assert_eq!(schema.sql_name(), "Decks");
        assert_eq!(schema.column_count(), 3);
    }

    #[test]
    fn test_resolve_unknown_key() {
        let registry = SchemaRegistry::new();
        let err = registry.resolve("deck").unwrap_err();
        assert_eq!(err, SchemaError::unknown_table("deck"));
        assert_eq!(err.to_string(), "Table does not exist");
    }

    #[test]
    fn test_define_rejects_duplicate_key() {
        let mut registry = SchemaRegistry::new();
        registry.define("deck", deck_schema()).unwrap();
        let err = registry.define("deck", deck_schema()).unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateTable { .. }));
    }

    #[test]
    fn test_define_rejects_invalid_schema() {
        let mut registry = SchemaRegistry::new();
        let err = registry
            .define("deck", TableSchema::new("Decks", vec![]))
            .unwrap_err();
        assert!(matches!(err, SchemaError::InvalidSchema { .. }));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_define_rejects_empty_key() {
        let mut registry = SchemaRegistry::new();
        assert!(registry.define("", deck_schema()).is_err());
    }

    #[test]
    fn test_catalog_json_roundtrip() {
        let doc = r#"{
            "deck": {
                "name": "Decks",
                "columns": [
                    { "name": "did", "type": "string" },
                    { "name": "name", "type": "string" },
                    { "name": "email", "type": "string" }
                ]
            }
        }"#;
        let registry = SchemaRegistry::from_catalog_json(doc).unwrap();
        assert_eq!(registry.len(), 1);
        let schema = registry.resolve("deck").unwrap();
        assert_eq!(schema.columns()[0].name, "did");
        assert_eq!(schema.columns()[2].name, "email");
    }

    #[test]
    fn test_catalog_json_malformed() {
        let err = SchemaRegistry::from_catalog_json("{ not json").unwrap_err();
        assert!(matches!(err, SchemaError::MalformedCatalog(_)));
    }

    #[test]
    fn test_catalog_json_invalid_schema_fails_whole_load() {
        let doc = r#"{
            "bad": { "name": "Bad", "columns": [] },
            "deck": {
                "name": "Decks",
                "columns": [ { "name": "did", "type": "string" } ]
            }
        }"#;
        assert!(SchemaRegistry::from_catalog_json(doc).is_err());
    }

    #[test]
    fn test_catalog_json_unknown_type_tag() {
        let doc = r#"{
            "deck": {
                "name": "Decks",
                "columns": [ { "name": "did", "type": "uuid" } ]
            }
        }"#;
        assert!(matches!(
            SchemaRegistry::from_catalog_json(doc).unwrap_err(),
            SchemaError::MalformedCatalog(_)
        ));
    }
}
