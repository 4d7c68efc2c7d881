//! TCP-based probe and fetch capabilities.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::net::TcpStream;
use tokio::time;

use crate::channel::{Channel, ChannelId, Probe};
use crate::error::{FetchError, FetchResult, ProbeError, ProbeResult};
use crate::failover::DataSource;

/// Probe that attempts a TCP connect within a deadline.
pub struct TcpProbe {
    addr: SocketAddr,
    timeout: Duration,
}

impl TcpProbe {
    pub fn new(addr: SocketAddr, timeout: Duration) -> Self {
        Self { addr, timeout }
    }
}

#[async_trait]
impl Probe for TcpProbe {
    async fn check(&self) -> ProbeResult {
        match time::timeout(self.timeout, TcpStream::connect(self.addr)).await {
            Ok(Ok(_stream)) => Ok(true),
            Ok(Err(err)) => {
                tracing::debug!(addr = %self.addr, error = %err, "Probe connect refused");
                Ok(false)
            }
            Err(_) => Err(ProbeError::Timeout(self.timeout)),
        }
    }
}

/// Fetch capability that connects to the active channel's endpoint and
/// reads a single line as the record payload.
pub struct TcpLineSource {
    endpoints: HashMap<ChannelId, SocketAddr>,
    timeout: Duration,
}

impl TcpLineSource {
    pub fn new(endpoints: HashMap<ChannelId, SocketAddr>, timeout: Duration) -> Self {
        Self { endpoints, timeout }
    }
}

#[async_trait]
impl DataSource for TcpLineSource {
    async fn fetch(&self, channel: &Channel) -> FetchResult<String> {
        let addr = self.endpoints.get(&channel.id).ok_or_else(|| {
            FetchError::Rejected(format!("no endpoint for channel {}", channel.id))
        })?;

        let read_line = async {
            let stream = TcpStream::connect(addr).await?;
            let mut reader = BufReader::new(stream);
            let mut line = String::new();
            reader.read_line(&mut line).await?;
            Ok::<_, FetchError>(line.trim_end().to_string())
        };

        match time::timeout(self.timeout, read_line).await {
            Ok(result) => result,
            Err(_) => Err(FetchError::Timeout(self.timeout)),
        }
    }
}
