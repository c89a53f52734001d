//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events)
//!
//! Consumers:
//!     → stdout is reserved for query results; logs go to stderr
//! ```
//!
//! # Design Decisions
//! - Structured logging via the tracing crate
//! - Filter configurable via config file, overridden by RUST_LOG
//! - No metrics endpoint: the resolver is a short-lived pipeline process

pub mod logging;
