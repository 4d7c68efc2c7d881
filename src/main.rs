//! Channel failover daemon.
//!
//! # Architecture Overview
//!
//! ```text
//!                  ┌──────────────────────────────────────────────┐
//!                  │               FAILOVER DAEMON                 │
//!                  │                                               │
//!   config.toml ───┼─▶ config ──▶ channels (priority order)        │
//!                  │                 │                             │
//!                  │                 ▼                             │
//!                  │   ┌─────────┐  sweep   ┌──────────────┐       │
//!                  │   │ monitor │─────────▶│  evaluation  │       │
//!                  │   │  timer  │  probes  │  + failover  │       │
//!                  │   └─────────┘          └──────┬───────┘       │
//!                  │                               │ switch events │
//!                  │                               ▼               │
//!   data fetches ──┼─▶ getData ──▶ active channel  listeners       │
//!                  └──────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use clap::Parser;

use channel_failover::channel::{Channel, ChannelId};
use channel_failover::config;
use channel_failover::error::ListenerError;
use channel_failover::failover::ConnectionManager;
use channel_failover::net::{TcpLineSource, TcpProbe};
use channel_failover::observability;
use channel_failover::{SwitchEvent, SwitchListener};

#[derive(Parser)]
#[command(name = "channel-failover", about = "Channel pool with health-probe failover")]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, default_value = "failover.toml")]
    config: PathBuf,
}

/// Listener that narrates switches into the log.
struct LogListener;

#[async_trait]
impl SwitchListener for LogListener {
    async fn on_switch(&self, event: &SwitchEvent) -> Result<(), ListenerError> {
        tracing::info!(channel = %event.channel_id, "Active channel switched");
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    observability::logging::init("channel_failover=debug");

    tracing::info!("channel-failover v0.1.0 starting");

    let config = config::load_config(&cli.config)?;
    tracing::info!(
        channels = config.channels.len(),
        check_interval_ms = config.monitor.check_interval_ms,
        "Configuration loaded"
    );

    let mut endpoints: HashMap<ChannelId, SocketAddr> = HashMap::new();
    let mut channels = Vec::new();
    for entry in &config.channels {
        let addr: SocketAddr = entry.address.parse()?;
        let id = ChannelId::from(entry.id.clone());
        endpoints.insert(id.clone(), addr);
        channels.push(Channel::new(
            id,
            Box::new(TcpProbe::new(addr, config.timeouts.probe())),
        ));
    }

    let source = Arc::new(TcpLineSource::new(endpoints, config.timeouts.fetch()));
    let manager = Arc::new(ConnectionManager::new(
        channels,
        source,
        config.monitor.check_interval(),
    ));

    manager.add_listener(Arc::new(LogListener));
    manager.start_monitoring();

    // Poll the active channel at the sweep cadence and narrate results.
    let poller = manager.clone();
    let poll_interval = config.monitor.check_interval();
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(poll_interval);
        loop {
            ticker.tick().await;
            match poller.get_data().await {
                Some(record) => tracing::info!(
                    channel = %record.channel_id,
                    fetch_id = %record.fetch_id,
                    payload = %record.payload,
                    "Fetched record"
                ),
                None => tracing::debug!("No record fetched"),
            }
        }
    });

    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutdown signal received");

    manager.stop_monitoring();
    tracing::info!("Shutdown complete");
    Ok(())
}
