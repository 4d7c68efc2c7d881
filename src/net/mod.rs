//! Concrete network capabilities.
//!
//! # Responsibilities
//! - Provide real probe and fetch implementations over TCP for the
//!   daemon; the core itself only consumes the capability traits
//!
//! # Design Decisions
//! - A refused connection is a clean negative probe, not an error
//! - A probe that exceeds its deadline is an error (also counts as
//!   unavailable at the channel boundary)

pub mod tcp;

pub use tcp::{TcpLineSource, TcpProbe};
