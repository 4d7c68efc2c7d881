//! Connection manager: failover policy, fetch façade, lifecycle.
//!
//! # Responsibilities
//! - Own the ordered channel set and the single active-channel reference
//! - Run the evaluation pass that decides and performs failover
//! - Expose the data-fetch façade with self-healing on failure
//! - Deliver switch events to registered listeners
//!
//! # Design Decisions
//! - Evaluation passes are serialized by an async gate; the sweep loop
//!   and fetch-triggered recovery never interleave
//! - The active reference is the authoritative pointer for fetches; a
//!   channel's `Connected` state alone does not make it active
//! - A failed fetch marks the active channel unavailable before the
//!   recovery pass, so the pass can actually move off it

use std::sync::{Arc, Mutex};
use std::time::Duration;

use arc_swap::ArcSwapOption;
use futures_util::future::join_all;
use uuid::Uuid;

use crate::channel::{Channel, ChannelState};
use crate::failover::event::{SwitchEvent, SwitchListener};
use crate::failover::monitor::MonitorTask;
use crate::failover::selection;
use crate::failover::source::{DataRecord, DataSource};

/// Default sweep interval.
pub const DEFAULT_CHECK_INTERVAL: Duration = Duration::from_millis(5000);

/// Manages a pool of interchangeable channels with automatic failover.
pub struct ConnectionManager {
    /// Channels in priority order, fixed at construction.
    channels: Vec<Arc<Channel>>,
    /// Sweep interval for the monitor loop.
    interval: Duration,
    /// Fetch capability for the active channel.
    source: Arc<dyn DataSource>,
    /// The single channel currently designated for fetches.
    active: ArcSwapOption<Channel>,
    /// Switch-event listeners in registration order.
    listeners: Mutex<Vec<Arc<dyn SwitchListener>>>,
    /// Append-only audit trail of fetched records for this session.
    buffer: Mutex<Vec<DataRecord>>,
    /// Running sweep loop, if any.
    monitor: Mutex<Option<MonitorTask>>,
    /// Serializes evaluation passes.
    eval_gate: tokio::sync::Mutex<()>,
}

impl ConnectionManager {
    /// Create a manager over `channels` in the given priority order.
    pub fn new(
        channels: Vec<Channel>,
        source: Arc<dyn DataSource>,
        interval: Duration,
    ) -> Self {
        Self {
            channels: channels.into_iter().map(Arc::new).collect(),
            interval,
            source,
            active: ArcSwapOption::empty(),
            listeners: Mutex::new(Vec::new()),
            buffer: Mutex::new(Vec::new()),
            monitor: Mutex::new(None),
            eval_gate: tokio::sync::Mutex::new(()),
        }
    }

    /// The managed channels, in priority order.
    pub fn channels(&self) -> &[Arc<Channel>] {
        &self.channels
    }

    /// The currently active channel, if any.
    pub fn active_channel(&self) -> Option<Arc<Channel>> {
        self.active.load_full()
    }

    /// Register a switch-event listener. No deduplication.
    pub fn add_listener(&self, listener: Arc<dyn SwitchListener>) {
        self.listeners.lock().unwrap().push(listener);
    }

    /// Copy of the audit buffer. The buffer itself is append-only and
    /// unbounded; callers needing eviction should snapshot and flush
    /// externally.
    pub fn buffer_snapshot(&self) -> Vec<DataRecord> {
        self.buffer.lock().unwrap().clone()
    }

    /// True while the sweep loop is running.
    pub fn is_monitoring(&self) -> bool {
        self.monitor.lock().unwrap().is_some()
    }

    /// Start the periodic sweep loop. No-op if already running.
    pub fn start_monitoring(self: &Arc<Self>) {
        let mut monitor = self.monitor.lock().unwrap();
        if monitor.is_some() {
            return;
        }
        *monitor = Some(MonitorTask::spawn(self.clone(), self.interval));
    }

    /// Stop the sweep loop. No-op if not running. An in-flight sweep
    /// completes; only the timer is cancelled.
    pub fn stop_monitoring(&self) {
        if let Some(task) = self.monitor.lock().unwrap().take() {
            task.stop();
            tracing::info!("Monitoring stopped");
        }
    }

    /// One full sweep: probe every channel concurrently, wait for all
    /// probes to settle, then run one evaluation pass. The monitor loop
    /// calls this on every tick; it can also be driven manually.
    pub async fn sweep(&self) {
        join_all(self.channels.iter().map(|ch| ch.check_availability())).await;
        self.evaluate_channels().await;
    }

    /// Evaluation pass: if there is no active channel, or the active
    /// channel is no longer `Connected`, select the next viable channel
    /// and switch to it, notifying listeners. Finding no candidate is
    /// logged, not an error.
    pub async fn evaluate_channels(&self) {
        let _gate = self.eval_gate.lock().await;

        let active = self.active.load_full();
        let healthy = active
            .as_ref()
            .is_some_and(|ch| ch.state() == ChannelState::Connected);
        if healthy {
            return;
        }

        match selection::first_viable(&self.channels) {
            Some(next) => {
                let already_active = active
                    .as_ref()
                    .is_some_and(|current| Arc::ptr_eq(current, &next));
                if already_active {
                    return;
                }
                self.switch_to_channel(&next);
                let event = SwitchEvent::switched_to(next.id.clone());
                self.notify(&event).await;
            }
            None => {
                tracing::warn!("No channel available");
            }
        }
    }

    /// Fetch one record from the active channel.
    ///
    /// Returns `None` when there is no connected active channel, and
    /// when the fetch fails; a failed fetch marks the channel
    /// unavailable and triggers exactly one recovery evaluation before
    /// returning. Fetch errors never propagate to the caller.
    pub async fn get_data(&self) -> Option<DataRecord> {
        let active = match self.active.load_full() {
            Some(ch) if ch.state() == ChannelState::Connected => ch,
            _ => {
                tracing::error!("No active channel for data fetch");
                return None;
            }
        };

        let fetch_id = Uuid::new_v4();
        match self.source.fetch(&active).await {
            Ok(payload) => {
                let record = DataRecord {
                    fetch_id,
                    channel_id: active.id.clone(),
                    payload,
                };
                self.buffer.lock().unwrap().push(record.clone());
                Some(record)
            }
            Err(err) => {
                tracing::error!(
                    channel = %active.id,
                    %fetch_id,
                    error = %err,
                    "Data fetch failed"
                );
                active.set_state(ChannelState::Unavailable);
                self.evaluate_channels().await;
                None
            }
        }
    }

    fn switch_to_channel(&self, next: &Arc<Channel>) {
        tracing::info!(channel = %next.id, "Switching active channel");
        next.set_state(ChannelState::Connected);
        self.active.store(Some(next.clone()));
    }

    /// Deliver `event` to every listener in registration order, each
    /// awaited to completion. A failing listener is logged and does not
    /// block the listeners after it.
    async fn notify(&self, event: &SwitchEvent) {
        let listeners: Vec<Arc<dyn SwitchListener>> =
            self.listeners.lock().unwrap().clone();
        for listener in listeners {
            if let Err(err) = listener.on_switch(event).await {
                tracing::error!(
                    channel = %event.channel_id,
                    error = %err,
                    "Switch listener failed"
                );
            }
        }
    }
}

impl Drop for ConnectionManager {
    fn drop(&mut self) {
        if let Some(task) = self.monitor.lock().unwrap().take() {
            task.stop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::FnProbe;
    use crate::error::FetchResult;
    use async_trait::async_trait;

    struct NullSource;

    #[async_trait]
    impl DataSource for NullSource {
        async fn fetch(&self, _channel: &Channel) -> FetchResult<String> {
            Ok("payload".to_string())
        }
    }

    fn manager(ids: &[&str]) -> Arc<ConnectionManager> {
        let channels = ids
            .iter()
            .map(|id| Channel::new(*id, Box::new(FnProbe::new(|| async { Ok(true) }))))
            .collect();
        Arc::new(ConnectionManager::new(
            channels,
            Arc::new(NullSource),
            DEFAULT_CHECK_INTERVAL,
        ))
    }

    #[tokio::test]
    async fn test_first_sweep_selects_first_channel() {
        let mgr = manager(&["a", "b", "c"]);
        mgr.sweep().await;
        assert_eq!(mgr.active_channel().unwrap().id.as_str(), "a");
        assert_eq!(mgr.channels()[0].state(), ChannelState::Connected);
    }

    #[tokio::test]
    async fn test_evaluation_is_idempotent_on_healthy_active() {
        let mgr = manager(&["a", "b"]);
        mgr.sweep().await;
        let first = mgr.active_channel().unwrap();
        mgr.sweep().await;
        mgr.evaluate_channels().await;
        assert!(Arc::ptr_eq(&first, &mgr.active_channel().unwrap()));
    }

    #[tokio::test]
    async fn test_at_most_one_connected() {
        let mgr = manager(&["a", "b", "c"]);
        mgr.sweep().await;
        mgr.channels()[0].set_state(ChannelState::Unavailable);
        mgr.evaluate_channels().await;

        assert_eq!(mgr.active_channel().unwrap().id.as_str(), "b");
        let connected = mgr
            .channels()
            .iter()
            .filter(|ch| ch.state() == ChannelState::Connected)
            .count();
        assert_eq!(connected, 1);
    }
}
