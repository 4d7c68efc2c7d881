//! Data-fetch capability and the fetched-record type.

use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::channel::{Channel, ChannelId};
use crate::error::FetchResult;

/// One successfully fetched record, as kept in the manager's audit buffer.
#[derive(Debug, Clone, Serialize)]
pub struct DataRecord {
    /// Correlation id for this fetch, also attached to its log events.
    pub fetch_id: Uuid,
    /// Channel the record was fetched from.
    pub channel_id: ChannelId,
    /// Opaque payload as delivered by the source.
    pub payload: String,
}

/// Fetch capability, external to the core.
///
/// Given the currently active channel, produce one payload or fail.
/// Failures are absorbed by the manager's fetch façade.
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn fetch(&self, channel: &Channel) -> FetchResult<String>;
}
