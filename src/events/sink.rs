//! Event sink port and in-memory adapters.

use super::WorkflowEvent;
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

/// Outbound contract to the notification collaborator.
///
/// Publishing is fire-and-forget from the engine's perspective; adapters
/// own durability and delivery, and report their own failures out of band.
#[async_trait]
pub trait EventSink: Send + Sync {
    /// Hands an event to the notification collaborator.
    async fn publish(&self, event: WorkflowEvent);
}

/// Sink that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullEventSink;

#[async_trait]
impl EventSink for NullEventSink {
    async fn publish(&self, _event: WorkflowEvent) {}
}

/// Sink that records events for inspection in tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingEventSink {
    events: Arc<RwLock<Vec<WorkflowEvent>>>,
}

impl RecordingEventSink {
    /// Creates an empty recording sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the events published so far.
    ///
    /// Returns an empty list when the recording state is poisoned.
    #[must_use]
    pub fn events(&self) -> Vec<WorkflowEvent> {
        self.events
            .read()
            .map(|events| events.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl EventSink for RecordingEventSink {
    async fn publish(&self, event: WorkflowEvent) {
        if let Ok(mut events) = self.events.write() {
            events.push(event);
        }
    }
}
