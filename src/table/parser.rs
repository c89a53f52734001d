//! Parsing of individual routing-table rows.

use thiserror::Error;

use crate::net::{parse_prefix, PrefixParseError};
use crate::routing::{AddressPrefix, PopId};

/// One row of the routing table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableEntry {
    pub prefix: AddressPrefix,
    pub pop: PopId,
}

/// Errors from parsing a single table row.
#[derive(Debug, Error)]
pub enum EntryParseError {
    /// No space between the prefix and the PoP id.
    #[error("bad entry format (expected \"prefix pop\"): {0:?}")]
    MissingPop(String),

    /// The prefix part is malformed.
    #[error(transparent)]
    Prefix(#[from] PrefixParseError),

    /// The PoP id is not an unsigned 16-bit integer.
    #[error("bad PoP id {0:?}")]
    BadPop(String),
}

/// Parse one `"<ipv6>/<length> <pop>"` row.
pub fn parse_entry(line: &str) -> Result<TableEntry, EntryParseError> {
    let (prefix_text, pop_text) = line
        .split_once(' ')
        .ok_or_else(|| EntryParseError::MissingPop(line.to_string()))?;

    let prefix = parse_prefix(prefix_text)?;
    let pop: PopId = pop_text
        .parse()
        .map_err(|_| EntryParseError::BadPop(pop_text.to_string()))?;

    Ok(TableEntry { prefix, pop })
}
