//! Shared scripted capabilities for integration tests.

// Each test binary uses its own subset of these helpers.
#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use channel_failover::channel::Channel;
use channel_failover::error::{FetchError, FetchResult, ListenerError, ProbeError, ProbeResult};
use channel_failover::{DataSource, Probe, SwitchEvent, SwitchListener};

/// Probe controlled by a shared flag, counting every check.
pub struct FlagProbe {
    up: Arc<AtomicBool>,
    checks: Arc<AtomicUsize>,
}

impl FlagProbe {
    pub fn new(up: Arc<AtomicBool>) -> Self {
        Self {
            up,
            checks: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn counting(up: Arc<AtomicBool>, checks: Arc<AtomicUsize>) -> Self {
        Self { up, checks }
    }
}

#[async_trait]
impl Probe for FlagProbe {
    async fn check(&self) -> ProbeResult {
        self.checks.fetch_add(1, Ordering::SeqCst);
        Ok(self.up.load(Ordering::SeqCst))
    }
}

/// Probe that always fails with an error.
pub struct ErrProbe;

#[async_trait]
impl Probe for ErrProbe {
    async fn check(&self) -> ProbeResult {
        Err(ProbeError::Other("injected probe failure".into()))
    }
}

/// Source controlled by a failure flag.
pub struct FlagSource {
    fail: Arc<AtomicBool>,
    payload: &'static str,
}

impl FlagSource {
    pub fn new(fail: Arc<AtomicBool>, payload: &'static str) -> Self {
        Self { fail, payload }
    }
}

#[async_trait]
impl DataSource for FlagSource {
    async fn fetch(&self, _channel: &Channel) -> FetchResult<String> {
        if self.fail.load(Ordering::SeqCst) {
            Err(FetchError::Rejected("injected fetch failure".into()))
        } else {
            Ok(self.payload.to_string())
        }
    }
}

/// Listener that records every event it receives.
pub struct RecordingListener {
    events: Arc<Mutex<Vec<SwitchEvent>>>,
}

impl RecordingListener {
    pub fn new() -> (Arc<Self>, Arc<Mutex<Vec<SwitchEvent>>>) {
        let events = Arc::new(Mutex::new(Vec::new()));
        (
            Arc::new(Self {
                events: events.clone(),
            }),
            events,
        )
    }
}

#[async_trait]
impl SwitchListener for RecordingListener {
    async fn on_switch(&self, event: &SwitchEvent) -> Result<(), ListenerError> {
        self.events.lock().unwrap().push(event.clone());
        Ok(())
    }
}

/// Listener that always fails.
pub struct FailingListener;

#[async_trait]
impl SwitchListener for FailingListener {
    async fn on_switch(&self, _event: &SwitchEvent) -> Result<(), ListenerError> {
        Err(ListenerError::new("injected listener failure"))
    }
}
