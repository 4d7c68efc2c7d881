//! Channel selection.
//!
//! Pure priority order: the first channel in declaration order whose
//! state is Idle or Connected wins. No rotation, no load balancing.

use std::sync::Arc;

use crate::channel::Channel;

/// Return the first viable channel, or `None` if every channel is
/// unavailable. Deterministic for a fixed state snapshot.
pub fn first_viable(channels: &[Arc<Channel>]) -> Option<Arc<Channel>> {
    channels.iter().find(|ch| ch.is_viable()).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::{ChannelState, FnProbe};

    fn channel(id: &str) -> Arc<Channel> {
        Arc::new(Channel::new(id, Box::new(FnProbe::new(|| async { Ok(true) }))))
    }

    #[test]
    fn test_first_in_order_wins() {
        let channels = vec![channel("a"), channel("b"), channel("c")];
        let picked = first_viable(&channels).unwrap();
        assert_eq!(picked.id.as_str(), "a");
    }

    #[test]
    fn test_unavailable_skipped() {
        let channels = vec![channel("a"), channel("b"), channel("c")];
        channels[0].set_state(ChannelState::Unavailable);
        let picked = first_viable(&channels).unwrap();
        assert_eq!(picked.id.as_str(), "b");
    }

    #[test]
    fn test_connected_qualifies() {
        let channels = vec![channel("a"), channel("b")];
        channels[0].set_state(ChannelState::Unavailable);
        channels[1].set_state(ChannelState::Connected);
        let picked = first_viable(&channels).unwrap();
        assert_eq!(picked.id.as_str(), "b");
    }

    #[test]
    fn test_none_when_all_down() {
        let channels = vec![channel("a"), channel("b")];
        for ch in &channels {
            ch.set_state(ChannelState::Unavailable);
        }
        assert!(first_viable(&channels).is_none());
    }

    #[test]
    fn test_deterministic_across_calls() {
        let channels = vec![channel("a"), channel("b"), channel("c")];
        channels[1].set_state(ChannelState::Unavailable);
        for _ in 0..10 {
            assert_eq!(first_viable(&channels).unwrap().id.as_str(), "a");
        }
    }
}
