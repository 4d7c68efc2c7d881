//! Error definitions for the capability boundaries.
//!
//! Every error here stops at its boundary: probe errors are absorbed by
//! the channel state machine, fetch and listener errors by the manager.
//! None of them escape a public operation.

use std::time::Duration;

use thiserror::Error;

/// Errors raised by a channel's probe capability.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// Probe did not complete within its deadline.
    #[error("probe timed out after {0:?}")]
    Timeout(Duration),

    /// Underlying I/O failed (connect refused, reset, ...).
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Probe-specific failure.
    #[error("{0}")]
    Other(String),
}

/// Result type for probe capabilities.
pub type ProbeResult = Result<bool, ProbeError>;

/// Errors raised by the data-fetch capability.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Fetch did not complete within its deadline.
    #[error("fetch timed out after {0:?}")]
    Timeout(Duration),

    /// Underlying I/O failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The channel answered but refused or garbled the request.
    #[error("channel rejected fetch: {0}")]
    Rejected(String),
}

/// Result type for fetch capabilities.
pub type FetchResult<T> = Result<T, FetchError>;

/// Error raised by a switch-event listener.
///
/// Listener failures are isolated per listener: the manager logs them and
/// continues delivery to the remaining listeners.
#[derive(Debug, Error)]
#[error("listener failed: {0}")]
pub struct ListenerError(pub String);

impl ListenerError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}
