//! Query stream adapter.
//!
//! # Responsibilities
//! - Read ECS query prefixes line-by-line
//! - Resolve each against the routing trie
//! - Print one result line per query
//!
//! # Design Decisions
//! - A malformed query line aborts the stream (same strictness as the
//!   table load); "no matching entry" is a normal result, not an error
//! - Output goes through `io::Write` so tests can capture it

use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::net::{parse_prefix, PrefixParseError};
use crate::routing::RoutingTrie;

/// Errors raised while serving the query stream.
#[derive(Debug, Error)]
pub enum QueryError {
    /// Reading input or writing a result line failed.
    #[error("query stream I/O failed: {0}")]
    Io(#[from] io::Error),

    /// A query line is not a valid prefix.
    #[error("query line {line}: {source}")]
    BadQuery {
        line: usize,
        source: PrefixParseError,
    },
}

/// Resolve every query line from `input`, writing results to `output`.
pub fn run(
    trie: &RoutingTrie,
    input: impl BufRead,
    mut output: impl Write,
) -> Result<(), QueryError> {
    let mut served = 0u64;

    for (idx, line) in input.lines().enumerate() {
        let line = line?;
        let query = parse_prefix(&line).map_err(|source| QueryError::BadQuery {
            line: idx + 1,
            source,
        })?;

        match trie.find(query) {
            Some(m) => writeln!(
                output,
                "{query} => PoP: {}, prefix-length: {}",
                m.pop, m.prefix_length
            )?,
            None => writeln!(output, "{query} => no matching entry")?,
        }
        served += 1;
    }

    tracing::info!(served, "Query stream finished");
    Ok(())
}
