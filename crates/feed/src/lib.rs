//! Event Feed Subscription Service - the live half of the portal core.
//!
//! A subscriber asks for the campus event feed under a `FeedFilter` and gets
//! back a `Subscription`: one filtered, date-descending snapshot is delivered
//! through it after a short backing-store round trip, and the handle can be
//! released at any time. Releasing before the delivery boundary suppresses
//! the pending snapshot; releasing afterwards is a no-op. A filter change is
//! always unsubscribe-then-subscribe, never in-place mutation.
//!
//! Snapshots are authoritative and complete, never deltas. Source failures
//! arrive through the same channel as `FeedMessage::Unavailable` so the view
//! can render a retry affordance instead of an unhandled state.

pub mod fixtures;
pub mod source;
pub mod subscription;

pub use source::{EventSource, FeedError, FixtureEventSource};
pub use subscription::{FeedMessage, FeedService, Subscription, SubscriptionState};
