//! Channel health subsystem.
//!
//! # Data Flow
//! ```text
//! Sweep tick (failover/monitor.rs):
//!     → checkAvailability on every channel, concurrently
//!     → probe capability answers true / false / error
//!     → state.rs applies the transition
//!
//! State machine (state.rs):
//!     Idle ←→ Unavailable, Connected set only by the manager
//! ```
//!
//! # Design Decisions
//! - A successful probe never promotes a channel to Connected; only the
//!   manager's switch operation does
//! - Probe errors are absorbed here and count as a negative probe
//! - State is per-channel and atomic; the channel never locks

pub mod probe;
pub mod state;

pub use probe::{FnProbe, Probe};
pub use state::{Channel, ChannelId, ChannelState, ObservedState, StateTransition};
