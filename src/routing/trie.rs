//! Longest-prefix-match trie over IPv6 prefixes.
//!
//! # Responsibilities
//! - Store (prefix → PoP) entries, one fixed trie position per prefix
//! - Resolve a query prefix to the best matching entry
//! - Reject duplicate prefixes at load time
//!
//! # Design Decisions
//! - Plain binary trie: one node per prefix bit, two owned child slots
//! - Lookup walks the query's own bits first and keeps the deepest PoP
//!   seen on that path (longest prefix wins)
//! - If the walk lands exactly on a payload-free node, lookup descends
//!   into the subtree (0-child preferred) and returns the entry it hits:
//!   a more specific entry beats "no match"
//! - A root payload (a `/0` default route) is therefore only reachable
//!   through the fallback descent, never through the bit walk; queries
//!   that diverge from the table get no entry even when a default exists
//! - The reported prefix length is always the returned entry's own
//!   configured length, not the query's

use thiserror::Error;

use crate::routing::prefix::AddressPrefix;

/// Identifier of a serving location (Point of Presence).
pub type PopId = u16;

/// Errors raised while populating the trie.
#[derive(Debug, Error)]
pub enum InsertError {
    /// Two table rows carry the same address and length. The routing
    /// table is inconsistent; the load must not continue.
    #[error("duplicate prefix: {prefix}")]
    DuplicatePrefix { prefix: AddressPrefix },
}

/// A resolved route: the PoP and the configured length of the entry
/// that matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteMatch {
    pub pop: PopId,
    pub prefix_length: u8,
}

#[derive(Debug, Default)]
struct Node {
    pop: Option<PopId>,
    children: [Option<Box<Node>>; 2],
}

/// The routing table, compiled into a binary prefix trie.
///
/// Built once via [`insert`] during the load phase, then queried
/// read-only via [`find`]. No interior mutability: a populated trie can
/// be shared freely across reader threads.
///
/// [`insert`]: RoutingTrie::insert
/// [`find`]: RoutingTrie::find
#[derive(Debug, Default)]
pub struct RoutingTrie {
    root: Node,
    entries: usize,
}

impl RoutingTrie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries inserted so far.
    pub fn len(&self) -> usize {
        self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }

    /// Insert one table entry.
    ///
    /// Walks (and creates) the node path spelled by the prefix bits and
    /// stores the PoP at the final node. Insertion order never affects
    /// the resulting trie: each prefix has exactly one position.
    pub fn insert(&mut self, prefix: AddressPrefix, pop: PopId) -> Result<(), InsertError> {
        let mut cursor = prefix;
        let mut current = &mut self.root;
        while let Some(bit) = cursor.pop_bit() {
            current = &mut *current.children[bit.index()].get_or_insert_with(Box::default);
        }

        if current.pop.is_some() {
            return Err(InsertError::DuplicatePrefix { prefix });
        }

        current.pop = Some(pop);
        self.entries += 1;
        Ok(())
    }

    /// Resolve a query prefix to the best matching entry.
    ///
    /// Walks at most `length` bits of the query, remembering the deepest
    /// entry on the path. If no entry was seen and the walk consumed the
    /// whole query while still on an existing node, falls back into that
    /// node's subtree, preferring the 0-child, and returns the first
    /// entry found there. Returns `None` only when the query's bit path
    /// leaves the trie without ever passing an entry.
    pub fn find(&self, prefix: AddressPrefix) -> Option<RouteMatch> {
        let mut cursor = prefix;
        let mut depth: u8 = 0;
        let mut best: Option<RouteMatch> = None;
        let mut current: Option<&Node> = Some(&self.root);

        // Walk the query's own bits, tracking the deepest PoP on the path.
        // The root's own payload is never inspected here.
        while let Some(node) = current {
            let Some(bit) = cursor.pop_bit() else { break };
            depth += 1;

            current = node.children[bit.index()].as_deref();
            if let Some(pop) = current.and_then(|child| child.pop) {
                best = Some(RouteMatch {
                    pop,
                    prefix_length: depth,
                });
            }
        }

        // Fallback descent: the walk consumed the whole query and landed on
        // an existing node, but no entry covered the path. Pick the entry
        // reached by always preferring the 0-child. `depth` then equals the
        // found entry's configured prefix length.
        while best.is_none() {
            let Some(node) = current else { break };
            if let Some(pop) = node.pop {
                best = Some(RouteMatch {
                    pop,
                    prefix_length: depth,
                });
                break;
            }

            depth += 1;
            current = node.children[0].as_deref().or(node.children[1].as_deref());
        }

        best
    }
}
