//! Property tests for the routing trie.
//!
//! The trie is a canonical function of its entry set: these properties
//! check that against randomly generated tables and queries.

use std::collections::HashMap;

use proptest::prelude::*;

use ecs_router::routing::{AddressPrefix, PopId, RoutingTrie};

/// Canonical form of a prefix: only the top `length` bits kept.
fn canonical(address: u128, length: u8) -> (u128, u8) {
    let masked = if length == 0 {
        0
    } else {
        address & (u128::MAX << (128 - u32::from(length)))
    };
    (masked, length)
}

/// Deduplicate raw (address, length, pop) triples into a valid table.
fn dedup(raw: Vec<(u128, u8, PopId)>) -> HashMap<(u128, u8), PopId> {
    let mut table = HashMap::new();
    for (address, length, pop) in raw {
        table.entry(canonical(address, length)).or_insert(pop);
    }
    table
}

fn build(table: &HashMap<(u128, u8), PopId>) -> RoutingTrie {
    let mut trie = RoutingTrie::new();
    for (&(address, length), &pop) in table {
        trie.insert(AddressPrefix::new(address, length), pop)
            .expect("deduplicated entries cannot collide");
    }
    trie
}

/// True if `entry` covers the top `entry.1` bits of the query.
fn is_ancestor(entry: (u128, u8), query: (u128, u8)) -> bool {
    entry.1 <= query.1 && canonical(query.0, entry.1).0 == entry.0
}

fn raw_entries() -> impl Strategy<Value = Vec<(u128, u8, PopId)>> {
    proptest::collection::vec((any::<u128>(), 0u8..=128, any::<PopId>()), 0..48)
}

proptest! {
    /// Every inserted entry is found exactly, reporting its own length.
    #[test]
    fn prop_exact_match(raw in raw_entries()) {
        let table = dedup(raw);
        let trie = build(&table);
        prop_assert_eq!(trie.len(), table.len());

        for (&(address, length), &pop) in &table {
            let m = trie.find(AddressPrefix::new(address, length));
            let m = m.expect("inserted entry must be found");
            prop_assert_eq!(m.pop, pop);
            prop_assert_eq!(m.prefix_length, length);
        }
    }

    /// Insertion order never changes any lookup result.
    #[test]
    fn prop_order_independent(raw in raw_entries(), queries in proptest::collection::vec((any::<u128>(), 0u8..=128), 0..32)) {
        let table = dedup(raw);
        let forward = build(&table);

        let mut entries: Vec<_> = table.iter().map(|(&k, &v)| (k, v)).collect();
        entries.sort();
        entries.reverse();
        let mut backward = RoutingTrie::new();
        for ((address, length), pop) in entries {
            backward
                .insert(AddressPrefix::new(address, length), pop)
                .unwrap();
        }

        for (address, length) in queries {
            let q1 = AddressPrefix::new(address, length);
            prop_assert_eq!(forward.find(q1), backward.find(q1));
        }
    }

    /// Whatever `find` returns is a real table entry, and when an
    /// ancestor entry exists below the root, the deepest one wins.
    #[test]
    fn prop_result_is_consistent(raw in raw_entries(), queries in proptest::collection::vec((any::<u128>(), 0u8..=128), 0..32)) {
        let table = dedup(raw);
        let trie = build(&table);

        for query in queries {
            let result = trie.find(AddressPrefix::new(query.0, query.1));

            // The deepest non-root ancestor of the query, if any. Root
            // payloads (/0 entries) are only reachable via fallback.
            let best_ancestor = table
                .iter()
                .map(|(entry, pop)| (*entry, *pop))
                .filter(|(entry, _)| entry.1 > 0 && is_ancestor(*entry, query))
                .max_by_key(|(entry, _)| entry.1);

            match result {
                Some(m) => {
                    if let Some((entry, pop)) = best_ancestor {
                        // Longest prefix wins.
                        prop_assert_eq!(m.pop, pop);
                        prop_assert_eq!(m.prefix_length, entry.1);
                    } else {
                        // Fallback: must be an entry at least as specific
                        // as the query.
                        prop_assert!(m.prefix_length >= query.1);
                        let returned = table
                            .iter()
                            .any(|(entry, pop)| entry.1 == m.prefix_length && *pop == m.pop);
                        prop_assert!(returned, "result must be a table entry");
                    }
                }
                None => {
                    prop_assert!(best_ancestor.is_none());
                }
            }
        }
    }
}
