//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Daemon startup (main.rs):
//!     Load config → Validate → Build channels → Start monitoring
//!
//! Stop paths:
//!     stop_monitoring → broadcast stop → sweep loop exits between ticks
//!     ctrl-c → stop_monitoring → process exit
//! ```
//!
//! # Design Decisions
//! - Stop signals are broadcast; any number of tasks can subscribe
//! - Stopping never cancels work already in flight

pub mod shutdown;

pub use shutdown::Shutdown;
