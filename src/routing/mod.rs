//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Table load (at startup):
//!     TableEntry[] (prefix, pop)
//!     → trie.rs insert (one fixed position per prefix)
//!     → Freeze as immutable RoutingTrie
//!
//! Incoming ECS query (address, length):
//!     → prefix.rs (bit cursor over the query)
//!     → trie.rs find (longest-prefix walk + subtree fallback)
//!     → Return: RouteMatch or explicit no-entry
//! ```
//!
//! # Design Decisions
//! - Trie built once at load, immutable at runtime (thread-safe without locks)
//! - Deterministic: same query always resolves to the same PoP
//! - Longest prefix wins; the fallback descent prefers the 0-child
//! - Duplicate prefixes are a load-time error, never silently overwritten

pub mod prefix;
pub mod trie;

pub use prefix::{AddressPrefix, Bit};
pub use trie::{InsertError, PopId, RouteMatch, RoutingTrie};
