//! Switch events and the listener capability.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::channel::{ChannelId, ObservedState};
use crate::error::ListenerError;

/// Notification broadcast when the active channel changes.
///
/// The manager does not track the pre-switch state, so `old_state` is
/// always reported as `unknown`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwitchEvent {
    pub channel_id: ChannelId,
    pub old_state: ObservedState,
    pub new_state: ObservedState,
}

impl SwitchEvent {
    pub(crate) fn switched_to(channel_id: ChannelId) -> Self {
        Self {
            channel_id,
            old_state: ObservedState::Unknown,
            new_state: ObservedState::Connected,
        }
    }
}

/// Observer capability invoked on every channel switch.
///
/// Listeners run sequentially in registration order, each awaited to
/// completion before the next starts. A failing listener is logged and
/// skipped; it does not block the listeners after it.
#[async_trait]
pub trait SwitchListener: Send + Sync {
    async fn on_switch(&self, event: &SwitchEvent) -> Result<(), ListenerError>;
}
