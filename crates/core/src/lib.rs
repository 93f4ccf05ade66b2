//! Shared domain model for the AskCampus portal core.
//!
//! The portal's two active components - the assistant query orchestrator and
//! the event feed subscription service - both speak in terms of the types
//! defined here: conversation turns, event records and filters, the closed
//! assistant error taxonomy, and the layered application configuration.
//!
//! Presentation, routing, and authentication live outside this workspace and
//! consume these types through the `askcampus-assistant` and `askcampus-feed`
//! crates.

pub mod config;
pub mod domain;
pub mod errors;
pub mod logging;
pub mod markup;

pub use config::{AppConfig, ConfigError, ConfigOverrides, LoadOptions};
pub use domain::chat::{
    AssistantReply, ConversationTurn, InvalidQuery, Query, Speaker, UserContext,
};
pub use domain::event::{feed_order, EventCategory, EventRecord, FeedFilter};
pub use errors::{AssistantError, ErrorCategory};
pub use markup::{rejoin, segment_emphasis, Segment};
