//! deckdb - a strict, deterministic, schema-checked SQL statement builder
//!
//! Records are validated against declared table schemas and turned into
//! parameterized Postgres-style statements with `$n` placeholders. Values
//! never appear in the SQL text.

pub mod catalog;
pub mod decklist;
pub mod observability;
pub mod query;
pub mod schema;
pub mod store;
