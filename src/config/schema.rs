//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the resolver.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ResolverConfig {
    /// Routing-table source settings.
    pub table: TableConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Routing-table source configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TableConfig {
    /// Path to the routing-table file, one "prefix pop" row per line.
    pub path: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            path: "routing-data.txt".to_string(),
        }
    }
}

/// Observability settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Default log filter (overridden by `RUST_LOG`).
    pub log_level: String,

    /// Log output format: "pretty" or "compact".
    pub log_format: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "ecs_router=info".to_string(),
            log_format: "pretty".to_string(),
        }
    }
}
