//! Statement operation kinds
//!
//! All statements the builder can emit route through this enum. Callers
//! arriving from the wire carry the lowercase kind string; anything else
//! is rejected as `Invalid type`.

use std::fmt;
use std::str::FromStr;

use super::errors::QueryError;

/// The four statement kinds the builder emits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `INSERT INTO ... VALUES ... RETURNING *;`
    Insert,
    /// `SELECT * FROM ... WHERE ...;`
    Select,
    /// `UPDATE ... SET ... RETURNING *;`
    Update,
    /// `DELETE FROM ... WHERE ... RETURNING *;`
    Delete,
}

impl Operation {
    /// Returns the wire name for logging and parsing
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Insert => "insert",
            Operation::Select => "select",
            Operation::Update => "update",
            Operation::Delete => "delete",
        }
    }

    /// Inserts must carry every declared column; the caller's strict flag
    /// cannot relax that.
    pub fn is_always_strict(&self) -> bool {
        matches!(self, Operation::Insert)
    }

    /// Parses a wire kind string, rejecting unknown kinds
    pub fn parse(kind: &str) -> Result<Self, QueryError> {
        match kind {
            "insert" => Ok(Operation::Insert),
            "select" => Ok(Operation::Select),
            "update" => Ok(Operation::Update),
            "delete" => Ok(Operation::Delete),
            _ => Err(QueryError::InvalidType {
                kind: kind.to_string(),
            }),
        }
    }
}

impl FromStr for Operation {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::parse(s)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
