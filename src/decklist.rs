//! Decklist text parsing
//!
//! A decklist is plain text, one card per line: a count followed by the
//! card name (`"4 Lightning Bolt"`). Repeated names accumulate. Lines
//! without both a count and a name, or whose count is not a plain
//! integer, are skipped.

use std::collections::BTreeMap;

/// Parses a decklist into an aggregated name -> count map.
///
/// Handles both LF and CRLF input.
pub fn parse_decklist(input: &str) -> BTreeMap<String, u64> {
    let mut counts = BTreeMap::new();

    for line in input.lines() {
        let mut tokens = line.split_whitespace();
        let count_token = match tokens.next() {
            Some(t) => t,
            None => continue,
        };
        let name = tokens.collect::<Vec<_>>().join(" ");
        if name.is_empty() {
            continue;
        }
        let count: u64 = match count_token.parse() {
            Ok(n) => n,
            Err(_) => continue,
        };
        *counts.entry(name).or_insert(0) += count;
    }

    counts
}
