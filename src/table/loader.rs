//! Routing-table loading from disk or any line-oriented reader.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::routing::{InsertError, RoutingTrie};
use crate::table::parser::{parse_entry, EntryParseError};

/// Errors raised while loading the routing table. All of them are fatal:
/// the caller must not serve queries from a partially loaded table.
#[derive(Debug, Error)]
pub enum TableError {
    /// The table file could not be opened.
    #[error("failed to open routing table {path}: {source}")]
    Open { path: PathBuf, source: io::Error },

    /// Reading a line from the source failed.
    #[error("failed to read routing table: {0}")]
    Read(#[from] io::Error),

    /// A row is structurally invalid.
    #[error("routing table line {line}: {source}")]
    Entry { line: usize, source: EntryParseError },

    /// A row repeats an earlier row's prefix.
    #[error("routing table line {line}: {source}")]
    Insert { line: usize, source: InsertError },
}

/// Read table rows from `reader` and build the routing trie.
///
/// Every line must be a well-formed row; insertion order is irrelevant
/// to the result.
pub fn load_from_reader(reader: impl BufRead) -> Result<RoutingTrie, TableError> {
    let mut trie = RoutingTrie::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let entry = parse_entry(&line).map_err(|source| TableError::Entry {
            line: idx + 1,
            source,
        })?;
        trie.insert(entry.prefix, entry.pop)
            .map_err(|source| TableError::Insert {
                line: idx + 1,
                source,
            })?;
    }

    tracing::info!(entries = trie.len(), "Routing table loaded");
    Ok(trie)
}

/// Load the routing table from a file.
pub fn load_from_path(path: &Path) -> Result<RoutingTrie, TableError> {
    let file = File::open(path).map_err(|source| TableError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    load_from_reader(BufReader::new(file))
}
