//! Connection-resilience layer over a pool of interchangeable channels.
//!
//! Maintains exactly one active channel, periodically probes every
//! candidate, and fails over to the next healthy channel in priority
//! order when the active one becomes unavailable.

pub mod channel;
pub mod config;
pub mod error;
pub mod failover;
pub mod lifecycle;
pub mod net;
pub mod observability;

pub use channel::{Channel, ChannelId, ChannelState, Probe};
pub use config::FailoverConfig;
pub use failover::{ConnectionManager, DataRecord, DataSource, SwitchEvent, SwitchListener};
pub use lifecycle::Shutdown;
