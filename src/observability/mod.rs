//! Observability for deckdb
//!
//! Structured, synchronous, deterministic logging. One line per event.

mod logger;

pub use logger::{Logger, Severity};
