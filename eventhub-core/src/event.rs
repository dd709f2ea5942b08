//! Event model shared across the eventhub surfaces.
//!
//! The listing, detail, and create surfaces all work with the same `Event`
//! record. Fields that only the detail view uses (`full_description`,
//! `time`, `address`, `speakers`) are optional so that catalog entries stay
//! lightweight.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EventHubError;

/// A single schedulable happening with descriptive and capacity metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Opaque identifier, unique within a candidate set.
    pub id: String,
    pub title: String,
    pub description: String,
    /// Long-form copy for the detail view. Falls back to `description`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_description: Option<String>,
    /// Display text such as "March 15, 2025"; never parsed as a temporal value.
    pub date: String,
    /// Display text such as "9:00 AM - 5:00 PM".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    pub location: String,
    /// Street address for the detail view.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Current registrant count.
    pub attendees: u32,
    /// Capacity. `attendees <= max_attendees` is expected but not enforced.
    pub max_attendees: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub category: Category,
    pub tags: Vec<String>,
    /// Ticket price; 0 denotes a free event.
    pub price: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub speakers: Vec<Speaker>,
}

impl Event {
    pub fn is_free(&self) -> bool {
        self.price == 0.0
    }

    pub fn is_full(&self) -> bool {
        self.attendees >= self.max_attendees
    }

    /// Remaining capacity, saturating at zero for over-subscribed events.
    pub fn spots_left(&self) -> u32 {
        self.max_attendees.saturating_sub(self.attendees)
    }

    /// Long-form copy for the detail view, falling back to the summary.
    pub fn detail_text(&self) -> &str {
        self.full_description.as_deref().unwrap_or(&self.description)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// Find an event by id within a candidate set.
pub fn find_by_id<'a>(events: &'a [Event], id: &str) -> Option<&'a Event> {
    events.iter().find(|event| event.id == id)
}

/// A presenter on an event's detail view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Speaker {
    pub name: String,
    /// Role line shown under the name, e.g. "VP of AI at Tech Corp".
    pub title: String,
}

/// The fixed category set.
///
/// "All" is deliberately not a variant: it is a filter wildcard, not a
/// category an event can carry. See `query::CategoryFilter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Tech,
    Design,
    Business,
    Marketing,
    Music,
    Sports,
    Food,
    Arts,
    Other,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 9] = [
        Category::Tech,
        Category::Design,
        Category::Business,
        Category::Marketing,
        Category::Music,
        Category::Sports,
        Category::Food,
        Category::Arts,
        Category::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Tech => "Tech",
            Category::Design => "Design",
            Category::Business => "Business",
            Category::Marketing => "Marketing",
            Category::Music => "Music",
            Category::Sports => "Sports",
            Category::Food => "Food",
            Category::Arts => "Arts",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Category {
    type Err = EventHubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| EventHubError::UnknownCategory(s.to_string()))
    }
}
