use askcampus_core::EventRecord;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FeedError {
    #[error("event source unavailable: {0}")]
    Unavailable(String),
}

/// Where event records come from. The production analogue is a realtime
/// document-collection query; here the seam exists so the subscription
/// machinery can be exercised against fixtures and failing stubs alike.
#[async_trait]
pub trait EventSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<EventRecord>, FeedError>;
}

/// Static in-memory source backing the feed until a persisted store lands.
pub struct FixtureEventSource {
    events: Vec<EventRecord>,
}

impl FixtureEventSource {
    /// The standard campus event set.
    pub fn campus() -> Self {
        Self { events: crate::fixtures::campus_events() }
    }

    pub fn with_events(events: Vec<EventRecord>) -> Self {
        Self { events }
    }
}

impl Default for FixtureEventSource {
    fn default() -> Self {
        Self::campus()
    }
}

#[async_trait]
impl EventSource for FixtureEventSource {
    async fn fetch(&self) -> Result<Vec<EventRecord>, FeedError> {
        Ok(self.events.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::{EventSource, FixtureEventSource};

    #[tokio::test]
    async fn fixture_source_returns_the_full_campus_set() {
        let events = FixtureEventSource::campus().fetch().await.expect("static source");
        assert_eq!(events.len(), 8);
    }
}
