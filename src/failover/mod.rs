//! Failover subsystem.
//!
//! # Data Flow
//! ```text
//! Sweep tick (monitor.rs):
//!     → probe all channels concurrently (channel subsystem)
//!     → evaluation pass (manager.rs):
//!         active missing or not connected?
//!         → selection.rs (first viable channel, declaration order)
//!         → switch + broadcast SwitchEvent to listeners (event.rs)
//!
//! Data fetch (manager.rs):
//!     getData → fetch from active channel (source.rs)
//!         ok  → append to audit buffer, return record
//!         err → mark active unavailable, one evaluation pass, return none
//! ```
//!
//! # Design Decisions
//! - Exactly one active channel; selection is pure priority order
//! - Sweeps are serialized; a slow sweep delays the next tick
//! - Listener failures are isolated so delivery always completes
//! - No error from a probe, fetch, or listener escapes the manager

pub mod event;
pub mod manager;
pub mod monitor;
pub mod selection;
pub mod source;

pub use event::{SwitchEvent, SwitchListener};
pub use manager::ConnectionManager;
pub use source::{DataRecord, DataSource};
