//! Built-in table catalog for the deck tracker
//!
//! The five tables the service declares at startup. Keys are the logical
//! identifiers callers pass to the builder; schemas carry the SQL table
//! names.

use crate::schema::{ColumnDef, ColumnType, SchemaRegistry, SchemaResult, TableSchema};

/// Logical key for the card table
pub const CARDS: &str = "card";
/// Logical key for the deck table
pub const DECKS: &str = "deck";
/// Logical key for the user table
pub const USERS: &str = "user";
/// Logical key for the collection table
pub const COLLECTIONS: &str = "collection";
/// Logical key for the deck-content table
pub const CONTENT: &str = "content";

/// Returns a registry pre-populated with the deck tracker's tables.
///
/// Column order here is the order every generated statement uses.
pub fn default_registry() -> SchemaResult<SchemaRegistry> {
    let mut registry = SchemaRegistry::new();

    registry.define(
        CARDS,
        TableSchema::new(
            "Cards",
            vec![
                ColumnDef::new("name", ColumnType::String),
                ColumnDef::new("set", ColumnType::String),
                ColumnDef::new("colors", ColumnType::String),
                ColumnDef::new("cmc", ColumnType::Number),
                ColumnDef::new("rarity", ColumnType::String),
                ColumnDef::new("default", ColumnType::Boolean),
                ColumnDef::new("data", ColumnType::String),
            ],
        ),
    )?;

    registry.define(
        DECKS,
        TableSchema::new(
            "Decks",
            vec![
                ColumnDef::new("did", ColumnType::String),
                ColumnDef::new("name", ColumnType::String),
                ColumnDef::new("email", ColumnType::String),
            ],
        ),
    )?;

    registry.define(
        USERS,
        TableSchema::new(
            "Users",
            vec![
                ColumnDef::new("email", ColumnType::String),
                ColumnDef::new("password", ColumnType::String),
                ColumnDef::new("username", ColumnType::String),
            ],
        ),
    )?;

    registry.define(
        COLLECTIONS,
        TableSchema::new(
            "Collections",
            vec![
                ColumnDef::new("name", ColumnType::String),
                ColumnDef::new("email", ColumnType::String),
                ColumnDef::new("has", ColumnType::Number),
            ],
        ),
    )?;

    registry.define(
        CONTENT,
        TableSchema::new(
            "DeckContent",
            vec![
                ColumnDef::new("did", ColumnType::String),
                ColumnDef::new("name", ColumnType::String),
                ColumnDef::new("needed", ColumnType::Number),
            ],
        ),
    )?;

    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_has_all_tables() {
        let registry = default_registry().unwrap();
        assert_eq!(registry.len(), 5);
        for key in [CARDS, DECKS, USERS, COLLECTIONS, CONTENT] {
            assert!(registry.contains(key));
        }
    }

    #[test]
    fn test_card_table_layout() {
        let registry = default_registry().unwrap();
        let cards = registry.resolve(CARDS).unwrap();
        assert_eq!(cards.sql_name(), "Cards");

        let names: Vec<&str> = cards.columns().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            ["name", "set", "colors", "cmc", "rarity", "default", "data"]
        );
        assert_eq!(cards.type_of("cmc"), Some(ColumnType::Number));
        assert_eq!(cards.type_of("default"), Some(ColumnType::Boolean));
    }

    #[test]
    fn test_deck_table_layout() {
        let registry = default_registry().unwrap();
        let decks = registry.resolve(DECKS).unwrap();
        assert_eq!(decks.sql_name(), "Decks");
        let names: Vec<&str> = decks.columns().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["did", "name", "email"]);
    }

    #[test]
    fn test_content_table_layout() {
        let registry = default_registry().unwrap();
        let content = registry.resolve(CONTENT).unwrap();
        assert_eq!(content.sql_name(), "DeckContent");
        assert_eq!(content.type_of("needed"), Some(ColumnType::Number));
    }
}
