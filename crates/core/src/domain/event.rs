use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    Placement,
    Workshop,
    Cultural,
    Other,
}

impl EventCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Placement => "placement",
            Self::Workshop => "workshop",
            Self::Cultural => "cultural",
            Self::Other => "other",
        }
    }
}

/// Which event categories a subscriber wants delivered.
///
/// The filter set is deliberately narrower than `EventCategory`: the feed
/// view never filters down to `Other`, it only reaches those records through
/// `All`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FeedFilter {
    #[default]
    All,
    Placement,
    Workshop,
    Cultural,
}

impl FeedFilter {
    /// Maps a raw filter value from the view layer. Anything outside the
    /// closed set, including absence, means `All`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim).map(str::to_ascii_lowercase).as_deref() {
            Some("placement") => Self::Placement,
            Some("workshop") => Self::Workshop,
            Some("cultural") => Self::Cultural,
            _ => Self::All,
        }
    }

    pub fn matches(&self, category: EventCategory) -> bool {
        match self {
            Self::All => true,
            Self::Placement => category == EventCategory::Placement,
            Self::Workshop => category == EventCategory::Workshop,
            Self::Cultural => category == EventCategory::Cultural,
        }
    }
}

/// One campus event as sourced from the backing store. Records are immutable
/// snapshots; the feed only filters and orders them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: EventCategory,
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub time: Option<String>,
    pub location: String,
    pub organizer: String,
    #[serde(default)]
    pub registrations: Option<u32>,
    #[serde(default)]
    pub max_registrations: Option<u32>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub eligibility: Option<String>,
    #[serde(default)]
    pub registration_link: Option<String>,
}

impl EventRecord {
    pub fn date_display(&self) -> String {
        match self.date {
            Some(date) => date.to_string(),
            None => "TBD".to_string(),
        }
    }

    pub fn capacity_display(&self) -> Option<String> {
        match (self.registrations, self.max_registrations) {
            (Some(current), Some(max)) => Some(format!("{current}/{max}")),
            _ => None,
        }
    }
}

/// The total order every delivered snapshot follows: date descending,
/// dateless records after all dated records, ties broken by id ascending.
pub fn feed_order(a: &EventRecord, b: &EventRecord) -> Ordering {
    match (a.date, b.date) {
        (Some(date_a), Some(date_b)) => date_b.cmp(&date_a).then_with(|| a.id.cmp(&b.id)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.id.cmp(&b.id),
    }
}
