//! Periodic sweep loop.
//!
//! # Responsibilities
//! - Tick at the configured interval
//! - Run one full sweep per tick (probe all channels, then evaluate)
//! - Exit promptly on the manager's stop signal
//!
//! # Design Decisions
//! - The sweep body is awaited inside the tick arm, so sweeps are
//!   serialized and the stop signal lands between sweeps; an in-flight
//!   sweep always completes
//! - Missed ticks are delayed, not bursted
//! - The first sweep runs one full interval after start

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

use crate::failover::manager::ConnectionManager;
use crate::lifecycle::Shutdown;

/// Handle to a running sweep loop.
pub struct MonitorTask {
    shutdown: Shutdown,
    _handle: JoinHandle<()>,
}

impl MonitorTask {
    /// Spawn the sweep loop for `manager`.
    pub(crate) fn spawn(manager: Arc<ConnectionManager>, interval: Duration) -> Self {
        let shutdown = Shutdown::new();
        let mut stop = shutdown.subscribe();

        tracing::info!(interval_ms = interval.as_millis() as u64, "Channel monitor starting");

        let handle = tokio::spawn(async move {
            let start = time::Instant::now() + interval;
            let mut ticker = time::interval_at(start, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        manager.sweep().await;
                    }
                    _ = stop.recv() => {
                        tracing::info!("Channel monitor received stop signal, exiting loop");
                        break;
                    }
                }
            }
        });

        Self {
            shutdown,
            _handle: handle,
        }
    }

    /// Signal the loop to stop. The current sweep, if any, completes.
    pub(crate) fn stop(self) {
        self.shutdown.trigger();
    }
}
