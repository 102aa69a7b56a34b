//! Line formatting for the records output format
//!
//! Every records document starts with an `H` header line, followed by
//! `N` (country), `E` (border) and `P` (path) lines.

use std::fmt::Display;

use crate::dataset::CountryId;
use crate::graph::types::PathResult;

/// Escape double quotes in a string for records format.
/// Replaces `"` with `\"` to allow safe embedding in quoted fields.
pub fn escape_quotes(s: &str) -> String {
    s.replace('\"', r#"\""#)
}

/// Header line: `H borderpath=1 records=1 mode=<mode> key=value ...`
pub fn format_header<V: Display>(mode: &str, fields: &[(&str, V)]) -> String {
    let mut line = format!("H borderpath=1 records=1 mode={}", mode);
    for (key, value) in fields {
        line.push_str(&format!(" {}={}", key, value));
    }
    line
}

/// Country line: `N <id> "<name>"`
pub fn format_country_record(id: &CountryId, name: &str) -> String {
    format!("N {} \"{}\"", id, escape_quotes(name))
}

/// Border line: `E <from> <to>`
pub fn format_edge_record(from: &CountryId, to: &CountryId) -> String {
    format!("E {} {}", from, to)
}

/// Path summary line: `P <from> <to> hops=<n> cost=<c> algorithm=<a>`
pub fn format_path_record(result: &PathResult) -> String {
    format!(
        "P {} {} hops={} cost={} algorithm={}",
        result.from,
        result.to,
        result.hops,
        result.cost.value(),
        result.algorithm
    )
}
