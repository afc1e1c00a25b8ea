//! Event types for the Cadence event system
//!
//! `CadenceEvent` values are broadcast on the in-process [`EventBus`] and
//! forwarded to SSE clients. The `live` module holds the wire event names
//! used by the live-meeting collaborator; payloads for those are an external
//! contract and are not schema-enforced here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use uuid::Uuid;

/// Cadence event types
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CadenceEvent {
    /// An analysis request completed (persisted or compute-only)
    AnalysisCompleted {
        /// Persisted row id, when the endpoint persists
        record_id: Option<Uuid>,
        /// Task kind label (e.g. "content_analysis", "pitch_analysis")
        task: String,
        /// "model" when the provider answered, "fallback" otherwise
        source: String,
        timestamp: DateTime<Utc>,
    },

    /// A meeting transcript was summarized
    MeetingSummarized {
        summary_id: Uuid,
        meeting_id: Option<Uuid>,
        key_point_count: usize,
        timestamp: DateTime<Utc>,
    },
}

impl CadenceEvent {
    /// SSE event type string for this event
    pub fn event_type(&self) -> &'static str {
        match self {
            CadenceEvent::AnalysisCompleted { .. } => "analysis_completed",
            CadenceEvent::MeetingSummarized { .. } => "meeting_summarized",
        }
    }
}

/// Live-meeting wire event names (external collaborator's contract)
pub mod live {
    pub const MEETING_STARTED: &str = "meeting:started";
    pub const MEETING_ENDED: &str = "meeting:ended";
    pub const TRANSCRIPT_UPDATE: &str = "transcript:update";
    pub const QUESTION_SUGGESTED: &str = "question:suggested";
    pub const INSIGHT_GENERATED: &str = "insight:generated";
}

/// Broadcast channel for distributing events to SSE subscribers
#[derive(Debug, Clone)]
pub struct EventBus {
    tx: broadcast::Sender<CadenceEvent>,
}

impl EventBus {
    /// Create a new EventBus with the given channel capacity.
    ///
    /// Older events are dropped for lagging subscribers once the buffer fills.
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Subscribe to all future events
    pub fn subscribe(&self) -> broadcast::Receiver<CadenceEvent> {
        self.tx.subscribe()
    }

    /// Emit an event to all current subscribers.
    ///
    /// Returns the number of subscribers that received it; zero subscribers
    /// is not an error.
    pub fn emit(&self, event: CadenceEvent) -> usize {
        self.tx.send(event).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn emit_reaches_subscriber() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();

        bus.emit(CadenceEvent::AnalysisCompleted {
            record_id: None,
            task: "content_analysis".to_string(),
            source: "model".to_string(),
            timestamp: Utc::now(),
        });

        let event = rx.recv().await.unwrap();
        assert_eq!(event.event_type(), "analysis_completed");
    }

    #[test]
    fn emit_without_subscribers_is_ok() {
        let bus = EventBus::new(16);
        let delivered = bus.emit(CadenceEvent::MeetingSummarized {
            summary_id: Uuid::new_v4(),
            meeting_id: None,
            key_point_count: 3,
            timestamp: Utc::now(),
        });
        assert_eq!(delivered, 0);
    }
}
