use std::sync::Arc;
use std::time::Duration;

use askcampus_core::config::FeedConfig;
use askcampus_core::{feed_order, EventRecord, FeedFilter};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};

use crate::source::EventSource;

/// What a subscriber receives. A snapshot is always complete and already
/// filtered and ordered; a source failure arrives through the same channel
/// so the view can offer a retry instead of crashing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FeedMessage {
    Snapshot(Vec<EventRecord>),
    Unavailable { diagnostic: String },
}

/// Lifecycle of one subscription. `Created -> Delivered -> Released`, or
/// `Created -> Released` when unsubscribed before the delivery boundary.
/// There is no redelivery; a new snapshot means a new `subscribe` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubscriptionState {
    Created,
    Delivered,
    Released,
}

/// Hands out one snapshot per `subscribe` call after a short delay standing
/// in for the backing-store round trip.
pub struct FeedService {
    source: Arc<dyn EventSource>,
    delivery_delay: Duration,
}

impl FeedService {
    pub fn new(source: Arc<dyn EventSource>, delivery_delay: Duration) -> Self {
        Self { source, delivery_delay }
    }

    pub fn from_config(source: Arc<dyn EventSource>, config: &FeedConfig) -> Self {
        Self::new(source, Duration::from_millis(config.delivery_delay_ms))
    }

    /// Starts one delivery for `filter` and returns the handle it reports
    /// through. The snapshot is computed asynchronously, never within this
    /// call. Changing filters is the caller's unsubscribe + fresh subscribe.
    pub fn subscribe(&self, filter: FeedFilter) -> Subscription {
        let (message_tx, message_rx) = mpsc::channel(1);
        let (cancel_tx, cancel_rx) = oneshot::channel::<()>();

        let source = Arc::clone(&self.source);
        let delivery_delay = self.delivery_delay;
        debug!(?filter, "subscription created");

        tokio::spawn(async move {
            tokio::select! {
                _ = cancel_rx => {
                    debug!(?filter, "subscription released before delivery");
                    return;
                }
                _ = tokio::time::sleep(delivery_delay) => {}
            }

            let message = match source.fetch().await {
                Ok(events) => FeedMessage::Snapshot(assemble_snapshot(events, filter)),
                Err(error) => {
                    warn!(?filter, error = %error, "event source fetch failed");
                    FeedMessage::Unavailable { diagnostic: error.to_string() }
                }
            };

            // Fails only when the subscriber already unsubscribed; the
            // snapshot is then dropped unobserved.
            let _ = message_tx.send(message).await;
        });

        Subscription {
            messages: message_rx,
            cancel: Some(cancel_tx),
            state: SubscriptionState::Created,
        }
    }
}

/// Applies the filter invariant and the documented total order: every record
/// kept under filter F != All satisfies `record.category == F`, and the
/// result is sorted date-descending with dateless records last, ties by id.
fn assemble_snapshot(mut events: Vec<EventRecord>, filter: FeedFilter) -> Vec<EventRecord> {
    events.retain(|event| filter.matches(event.category));
    events.sort_by(feed_order);
    events
}

/// Handle for one pending or completed delivery.
pub struct Subscription {
    messages: mpsc::Receiver<FeedMessage>,
    cancel: Option<oneshot::Sender<()>>,
    state: SubscriptionState,
}

impl Subscription {
    pub fn state(&self) -> SubscriptionState {
        self.state
    }

    /// Waits for the delivery. Yields `Some` exactly once for a live
    /// subscription, then `None`; always `None` after `unsubscribe`.
    pub async fn next_message(&mut self) -> Option<FeedMessage> {
        if self.state == SubscriptionState::Released {
            return None;
        }

        let message = self.messages.recv().await;
        if message.is_some() && self.state == SubscriptionState::Created {
            self.state = SubscriptionState::Delivered;
        }
        message
    }

    /// Releases the subscription. Before delivery this suppresses the
    /// pending snapshot; after delivery it is a no-op. Safe to call more
    /// than once.
    pub fn unsubscribe(&mut self) {
        if self.state == SubscriptionState::Released {
            return;
        }
        if let Some(cancel) = self.cancel.take() {
            let _ = cancel.send(());
        }
        self.messages.close();
        self.state = SubscriptionState::Released;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    use askcampus_core::{EventCategory, EventRecord, FeedFilter};
    use async_trait::async_trait;

    use super::{FeedMessage, FeedService, SubscriptionState};
    use crate::source::{EventSource, FeedError, FixtureEventSource};

    const TEST_DELAY: Duration = Duration::from_millis(5);

    struct CountingSource {
        inner: FixtureEventSource,
        fetches: AtomicUsize,
    }

    impl CountingSource {
        fn new() -> Self {
            Self { inner: FixtureEventSource::campus(), fetches: AtomicUsize::new(0) }
        }
    }

    #[async_trait]
    impl EventSource for CountingSource {
        async fn fetch(&self) -> Result<Vec<EventRecord>, FeedError> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            self.inner.fetch().await
        }
    }

    struct FailingSource;

    #[async_trait]
    impl EventSource for FailingSource {
        async fn fetch(&self) -> Result<Vec<EventRecord>, FeedError> {
            Err(FeedError::Unavailable("backing store offline".to_string()))
        }
    }

    fn campus_service() -> FeedService {
        FeedService::new(Arc::new(FixtureEventSource::campus()), TEST_DELAY)
    }

    async fn snapshot_for(filter: FeedFilter) -> Vec<EventRecord> {
        let mut subscription = campus_service().subscribe(filter);
        match subscription.next_message().await {
            Some(FeedMessage::Snapshot(events)) => events,
            other => panic!("expected snapshot, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn placement_filter_delivers_the_two_drives_newest_first() {
        let events = snapshot_for(FeedFilter::Placement).await;

        let ids = events.iter().map(|event| event.id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["4", "1"], "2025-07-28 before 2025-07-25");
        assert!(events.iter().all(|event| event.category == EventCategory::Placement));
    }

    #[tokio::test]
    async fn every_narrow_filter_only_delivers_its_own_category() {
        for (filter, category) in [
            (FeedFilter::Placement, EventCategory::Placement),
            (FeedFilter::Workshop, EventCategory::Workshop),
            (FeedFilter::Cultural, EventCategory::Cultural),
        ] {
            let events = snapshot_for(filter).await;
            assert!(!events.is_empty());
            assert!(
                events.iter().all(|event| event.category == category),
                "filter {filter:?} leaked a foreign category"
            );
        }
    }

    #[tokio::test]
    async fn all_filter_delivers_the_full_set_date_descending() {
        let events = snapshot_for(FeedFilter::All).await;

        assert_eq!(events.len(), 8);
        let dates = events.iter().map(|event| event.date).collect::<Vec<_>>();
        let mut expected = dates.clone();
        expected.sort();
        expected.reverse();
        assert_eq!(dates, expected);
        assert_eq!(events[0].id, "8", "2025-08-08 startup pitch leads the feed");
    }

    #[tokio::test]
    async fn exactly_one_snapshot_per_subscription() {
        let mut subscription = campus_service().subscribe(FeedFilter::All);

        assert!(matches!(
            subscription.next_message().await,
            Some(FeedMessage::Snapshot(_))
        ));
        assert_eq!(subscription.state(), SubscriptionState::Delivered);
        assert_eq!(subscription.next_message().await, None, "no redelivery");
    }

    #[tokio::test]
    async fn unsubscribe_before_delivery_suppresses_the_snapshot() {
        let source = Arc::new(CountingSource::new());
        let service = FeedService::new(source.clone(), Duration::from_millis(30));

        let mut subscription = service.subscribe(FeedFilter::All);
        assert_eq!(subscription.state(), SubscriptionState::Created);
        subscription.unsubscribe();
        assert_eq!(subscription.state(), SubscriptionState::Released);

        assert_eq!(subscription.next_message().await, None);

        // Well past the delivery boundary: the fetch itself was cancelled.
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(source.fetches.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn unsubscribe_after_delivery_is_a_no_op() {
        let mut subscription = campus_service().subscribe(FeedFilter::Workshop);

        assert!(subscription.next_message().await.is_some());
        subscription.unsubscribe();
        subscription.unsubscribe();

        assert_eq!(subscription.state(), SubscriptionState::Released);
        assert_eq!(subscription.next_message().await, None);
    }

    #[tokio::test]
    async fn filter_change_is_a_fresh_subscription() {
        let service = campus_service();

        let mut first = service.subscribe(FeedFilter::All);
        assert!(first.next_message().await.is_some());
        first.unsubscribe();

        let mut second = service.subscribe(FeedFilter::Cultural);
        match second.next_message().await {
            Some(FeedMessage::Snapshot(events)) => {
                assert!(events.iter().all(|e| e.category == EventCategory::Cultural));
            }
            other => panic!("expected snapshot, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn source_failure_arrives_as_unavailable_not_a_fault() {
        let service = FeedService::new(Arc::new(FailingSource), TEST_DELAY);
        let mut subscription = service.subscribe(FeedFilter::All);

        match subscription.next_message().await {
            Some(FeedMessage::Unavailable { diagnostic }) => {
                assert!(diagnostic.contains("backing store offline"));
            }
            other => panic!("expected unavailable, got {other:?}"),
        }
        assert_eq!(subscription.state(), SubscriptionState::Delivered);
    }

    #[tokio::test]
    async fn repeated_subscriptions_deliver_identical_ordering() {
        let first = snapshot_for(FeedFilter::All).await;
        let second = snapshot_for(FeedFilter::All).await;

        let first_ids = first.iter().map(|e| e.id.as_str()).collect::<Vec<_>>();
        let second_ids = second.iter().map(|e| e.id.as_str()).collect::<Vec<_>>();
        assert_eq!(first_ids, second_ids);
    }
}
