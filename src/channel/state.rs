//! Channel abstraction and its health-state machine.
//!
//! # States
//! - Idle: probed healthy (or never probed), not currently selected
//! - Connected: currently selected as the active channel
//! - Unavailable: last probe failed or returned false
//!
//! # State Transitions
//! ```text
//! probe true  → Idle        (Connected is preserved, not demoted)
//! probe false → Unavailable
//! probe error → Unavailable
//! manager switch → Connected
//! failed fetch   → Unavailable
//! ```

use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};

use serde::{Deserialize, Serialize};

use crate::channel::probe::Probe;

/// Stable channel identifier, used for logging and equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelId(pub String);

impl ChannelId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ChannelId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ChannelId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Health state enum (0=Idle, 1=Connected, 2=Unavailable).
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelState {
    Idle = 0,
    Connected = 1,
    Unavailable = 2,
}

impl From<u8> for ChannelState {
    fn from(val: u8) -> Self {
        match val {
            1 => ChannelState::Connected,
            2 => ChannelState::Unavailable,
            _ => ChannelState::Idle,
        }
    }
}

/// State as reported in switch events.
///
/// `Unknown` covers the pre-switch state, which the manager does not
/// track when it broadcasts a switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObservedState {
    Unknown,
    Idle,
    Connected,
    Unavailable,
}

impl From<ChannelState> for ObservedState {
    fn from(state: ChannelState) -> Self {
        match state {
            ChannelState::Idle => ObservedState::Idle,
            ChannelState::Connected => ObservedState::Connected,
            ChannelState::Unavailable => ObservedState::Unavailable,
        }
    }
}

/// Before/after record returned by every availability check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateTransition {
    pub previous: ChannelState,
    pub current: ChannelState,
}

impl StateTransition {
    /// True if the check changed the channel's state.
    pub fn changed(&self) -> bool {
        self.previous != self.current
    }
}

/// A single candidate communication path.
///
/// Identity and probe are immutable after construction; `state` is the
/// only mutable field, written by [`Channel::check_availability`] and by
/// the manager.
pub struct Channel {
    /// The channel's stable identifier.
    pub id: ChannelId,
    /// Availability probe, supplied at construction.
    probe: Box<dyn Probe>,
    /// Current health state (0=Idle, 1=Connected, 2=Unavailable).
    state: AtomicU8,
}

impl Channel {
    /// Create a new channel in the `Idle` state.
    pub fn new(id: impl Into<ChannelId>, probe: Box<dyn Probe>) -> Self {
        Self {
            id: id.into(),
            probe,
            state: AtomicU8::new(ChannelState::Idle as u8),
        }
    }

    /// Current health state.
    pub fn state(&self) -> ChannelState {
        ChannelState::from(self.state.load(Ordering::Relaxed))
    }

    /// True if selection may pick this channel (Idle or Connected).
    pub fn is_viable(&self) -> bool {
        self.state() != ChannelState::Unavailable
    }

    pub(crate) fn set_state(&self, state: ChannelState) {
        self.state.store(state as u8, Ordering::Relaxed);
    }

    /// Run the probe and apply the resulting state transition.
    ///
    /// A healthy probe never promotes to `Connected`; it also never
    /// demotes the channel currently marked `Connected`. Probe errors
    /// are logged and count as a negative result. Always returns the
    /// before/after pair; never fails.
    pub async fn check_availability(&self) -> StateTransition {
        let previous = self.state();

        let current = match self.probe.check().await {
            Ok(true) => {
                if previous == ChannelState::Connected {
                    ChannelState::Connected
                } else {
                    ChannelState::Idle
                }
            }
            Ok(false) => ChannelState::Unavailable,
            Err(err) => {
                tracing::warn!(channel = %self.id, error = %err, "Probe failed");
                ChannelState::Unavailable
            }
        };

        self.set_state(current);
        StateTransition { previous, current }
    }
}

impl fmt::Debug for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Channel")
            .field("id", &self.id)
            .field("state", &self.state())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::probe::FnProbe;
    use crate::error::ProbeError;

    fn channel_with(result: Result<bool, &'static str>) -> Channel {
        Channel::new(
            "ch",
            Box::new(FnProbe::new(move || async move {
                result.map_err(|e| ProbeError::Other(e.to_string()))
            })),
        )
    }

    #[tokio::test]
    async fn test_probe_true_marks_idle() {
        let ch = channel_with(Ok(true));
        let t = ch.check_availability().await;
        assert_eq!(t.previous, ChannelState::Idle);
        assert_eq!(t.current, ChannelState::Idle);
        assert!(!t.changed());
    }

    #[tokio::test]
    async fn test_probe_true_preserves_connected() {
        let ch = channel_with(Ok(true));
        ch.set_state(ChannelState::Connected);
        let t = ch.check_availability().await;
        assert_eq!(t.current, ChannelState::Connected);
    }

    #[tokio::test]
    async fn test_probe_false_marks_unavailable() {
        let ch = channel_with(Ok(false));
        ch.set_state(ChannelState::Connected);
        let t = ch.check_availability().await;
        assert_eq!(t.previous, ChannelState::Connected);
        assert_eq!(t.current, ChannelState::Unavailable);
    }

    #[tokio::test]
    async fn test_probe_error_marks_unavailable() {
        let ch = channel_with(Err("boom"));
        let t = ch.check_availability().await;
        assert_eq!(t.current, ChannelState::Unavailable);
        assert_eq!(ch.state(), ChannelState::Unavailable);
    }

    #[tokio::test]
    async fn test_recovery_after_failure() {
        let ch = channel_with(Ok(false));
        ch.check_availability().await;
        assert_eq!(ch.state(), ChannelState::Unavailable);

        let ch2 = channel_with(Ok(true));
        ch2.set_state(ChannelState::Unavailable);
        let t = ch2.check_availability().await;
        assert_eq!(t.current, ChannelState::Idle);
    }

    #[test]
    fn test_state_from_u8() {
        assert_eq!(ChannelState::from(0), ChannelState::Idle);
        assert_eq!(ChannelState::from(1), ChannelState::Connected);
        assert_eq!(ChannelState::from(2), ChannelState::Unavailable);
        assert_eq!(ChannelState::from(99), ChannelState::Idle);
    }

    #[test]
    fn test_observed_state_wire_names() {
        let json = serde_json::to_string(&ObservedState::Unknown).unwrap();
        assert_eq!(json, "\"unknown\"");
        let json = serde_json::to_string(&ObservedState::Connected).unwrap();
        assert_eq!(json, "\"connected\"");
    }
}
