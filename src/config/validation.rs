//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check channel identity constraints (non-empty, unique ids)
//! - Validate value ranges (interval and timeouts positive, addresses
//!   parseable)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function over the config

use std::collections::HashSet;
use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::FailoverConfig;

/// A single semantic configuration error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The channel list is empty; the manager would have nothing to do.
    #[error("no channels configured")]
    NoChannels,

    /// A channel has an empty id.
    #[error("channel at index {0} has an empty id")]
    EmptyId(usize),

    /// Two channels share an id.
    #[error("duplicate channel id: {0}")]
    DuplicateId(String),

    /// A channel address is not a valid socket address.
    #[error("channel {id}: invalid address '{address}'")]
    InvalidAddress { id: String, address: String },

    /// The sweep interval must be positive.
    #[error("monitor.check_interval_ms must be positive")]
    ZeroInterval,

    /// Timeouts must be positive.
    #[error("timeouts.{0} must be positive")]
    ZeroTimeout(&'static str),
}

/// Validate `config`, collecting every semantic error.
pub fn validate_config(config: &FailoverConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.channels.is_empty() {
        errors.push(ValidationError::NoChannels);
    }

    let mut seen = HashSet::new();
    for (index, channel) in config.channels.iter().enumerate() {
        if channel.id.is_empty() {
            errors.push(ValidationError::EmptyId(index));
        } else if !seen.insert(channel.id.as_str()) {
            errors.push(ValidationError::DuplicateId(channel.id.clone()));
        }

        if channel.address.parse::<SocketAddr>().is_err() {
            errors.push(ValidationError::InvalidAddress {
                id: channel.id.clone(),
                address: channel.address.clone(),
            });
        }
    }

    if config.monitor.check_interval_ms == 0 {
        errors.push(ValidationError::ZeroInterval);
    }
    if config.timeouts.probe_ms == 0 {
        errors.push(ValidationError::ZeroTimeout("probe_ms"));
    }
    if config.timeouts.fetch_ms == 0 {
        errors.push(ValidationError::ZeroTimeout("fetch_ms"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
