//! ECS-to-PoP resolver library.
//!
//! Resolves an IPv6 address prefix (an EDNS Client-Subnet style query) to
//! the PoP serving it, using longest-prefix-match over a static routing
//! table.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌───────────────────────────────────────────┐
//!                      │                ECS ROUTER                  │
//!                      │                                            │
//!   routing table ─────┼─▶ table ──▶ routing::trie (built once,    │
//!   (prefix → pop)     │   loader      then immutable)              │
//!                      │                   ▲                        │
//!   query stream ──────┼─▶ query ──▶ net ──┘ (find: LPM walk +     │
//!   (one prefix/line)  │   loop     parse     subtree fallback)     │
//!                      │                                            │
//!   result lines ◀─────┼── query (format via AddressPrefix)         │
//!                      │                                            │
//!                      │  ┌──────────────────────────────────────┐  │
//!                      │  │      Cross-Cutting Concerns           │  │
//!                      │  │   config        observability         │  │
//!                      │  └──────────────────────────────────────┘  │
//!                      └───────────────────────────────────────────┘
//! ```

// Core subsystems
pub mod net;
pub mod query;
pub mod routing;
pub mod table;

// Cross-cutting concerns
pub mod config;
pub mod observability;

pub use config::ResolverConfig;
pub use routing::{AddressPrefix, PopId, RouteMatch, RoutingTrie};
