//! Probe capability trait.
//!
//! A probe answers one question: is this channel reachable right now.
//! How that is determined is up to the implementation; the channel only
//! interprets the boolean (or the error, which counts as unreachable).

use std::future::Future;

use async_trait::async_trait;

use crate::error::ProbeResult;

/// Availability probe bound to a single channel.
#[async_trait]
pub trait Probe: Send + Sync {
    /// Probe the channel once. `Ok(true)` means reachable.
    async fn check(&self) -> ProbeResult;
}

/// Adapter turning an async closure into a [`Probe`].
///
/// Mostly useful for tests and embedders with ad-hoc probe logic.
pub struct FnProbe<F>(F);

impl<F, Fut> FnProbe<F>
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = ProbeResult> + Send,
{
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

#[async_trait]
impl<F, Fut> Probe for FnProbe<F>
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = ProbeResult> + Send,
{
    async fn check(&self) -> ProbeResult {
        (self.0)().await
    }
}
