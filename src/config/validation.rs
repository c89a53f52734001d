//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges and enumerated settings
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: ResolverConfig → Result<(), Vec<ValidationError>>
//! - Runs before the config is accepted into the system

use thiserror::Error;

use crate::config::schema::ResolverConfig;

/// A single semantic problem found in the configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("table.path must not be empty")]
    EmptyTablePath,

    #[error("observability.log_format must be \"pretty\" or \"compact\", got {0:?}")]
    UnknownLogFormat(String),

    #[error("observability.log_level must not be empty")]
    EmptyLogLevel,
}

/// Check the configuration for semantic problems.
pub fn validate_config(config: &ResolverConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.table.path.is_empty() {
        errors.push(ValidationError::EmptyTablePath);
    }

    if config.observability.log_level.is_empty() {
        errors.push(ValidationError::EmptyLogLevel);
    }

    match config.observability.log_format.as_str() {
        "pretty" | "compact" => {}
        other => errors.push(ValidationError::UnknownLogFormat(other.to_string())),
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
