//! Expands one host input event into ordered sample sequences.

use crate::config::EngineConfig;
use crate::sample::{PointerEvent, PointerSample};

/// Real and predicted samples for one event, both in chronological order.
/// Predicted samples are speculative and must never reach the committed
/// surface; they are rebuilt from scratch every event.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SampleBatch {
    pub real: Vec<PointerSample>,
    pub predicted: Vec<PointerSample>,
}

/// Selects this event's samples according to the config: the coalesced
/// sub-samples when coalescing is on and the platform delivered any,
/// otherwise just the primary; predicted samples only when prediction is on.
/// No state is carried across calls.
pub fn batch(event: &PointerEvent, config: &EngineConfig) -> SampleBatch {
    let real = if config.coalescing_enabled && !event.coalesced.is_empty() {
        event.coalesced.clone()
    } else {
        event.primary.into_iter().collect()
    };

    let predicted = if config.prediction_enabled {
        event.predicted.clone()
    } else {
        Vec::new()
    };

    SampleBatch { real, predicted }
}
