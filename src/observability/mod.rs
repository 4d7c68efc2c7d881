//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via tracing; every state transition, switch,
//!   and absorbed error is an event with named fields
//! - Filter configurable via RUST_LOG with a sensible default
//! - No metrics exporter; embedders can hang their own subscriber layer

pub mod logging;
