//! Routing-table source.
//!
//! # Data Flow
//! ```text
//! routing table file (one "prefix pop" row per line)
//!     → parser.rs (split & parse one row)
//!     → loader.rs (read rows, insert into the trie)
//!     → RoutingTrie (fully populated, then frozen)
//! ```
//!
//! # Design Decisions
//! - Load is all-or-nothing: the first malformed or duplicate row aborts
//!   the load (serving from a partial table is worse than not serving)
//! - Errors carry the 1-based line number of the offending row

pub mod loader;
pub mod parser;

pub use loader::{load_from_path, load_from_reader, TableError};
pub use parser::{parse_entry, EntryParseError, TableEntry};
