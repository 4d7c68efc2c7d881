//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration for the failover daemon.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct FailoverConfig {
    /// Channel definitions, in priority order.
    pub channels: Vec<ChannelConfig>,

    /// Sweep-loop settings.
    pub monitor: MonitorConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,
}

/// One candidate channel.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChannelConfig {
    /// Unique channel identifier.
    pub id: String,

    /// Endpoint address (e.g., "127.0.0.1:9000").
    pub address: String,
}

/// Sweep-loop configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Health-sweep interval in milliseconds.
    pub check_interval_ms: u64,
}

impl MonitorConfig {
    pub fn check_interval(&self) -> Duration {
        Duration::from_millis(self.check_interval_ms)
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            check_interval_ms: 5000,
        }
    }
}

/// Timeout configuration for the TCP capabilities.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Probe (connect) timeout in milliseconds.
    pub probe_ms: u64,

    /// Fetch (connect + read) timeout in milliseconds.
    pub fetch_ms: u64,
}

impl TimeoutConfig {
    pub fn probe(&self) -> Duration {
        Duration::from_millis(self.probe_ms)
    }

    pub fn fetch(&self) -> Duration {
        Duration::from_millis(self.fetch_ms)
    }
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            probe_ms: 2000,
            fetch_ms: 3000,
        }
    }
}
