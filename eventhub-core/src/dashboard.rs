//! Dashboard aggregation over the user's managed events.
//!
//! Managed events carry engagement counters (views, registrations) and a
//! lifecycle status on top of the basic capacity figures. Everything here
//! is pure computation over a slice; the dashboard view re-runs it on each
//! filter change.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{EventHubError, EventHubResult};

/// Lifecycle status of a managed event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventStatus {
    Upcoming,
    Completed,
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EventStatus::Upcoming => write!(f, "Upcoming"),
            EventStatus::Completed => write!(f, "Completed"),
        }
    }
}

/// Status selection for the dashboard table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusFilter {
    #[default]
    All,
    Upcoming,
    Completed,
}

impl StatusFilter {
    pub fn matches(&self, status: EventStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Upcoming => status == EventStatus::Upcoming,
            StatusFilter::Completed => status == EventStatus::Completed,
        }
    }

    pub fn from_arg(s: &str) -> EventHubResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(StatusFilter::All),
            "upcoming" => Ok(StatusFilter::Upcoming),
            "completed" => Ok(StatusFilter::Completed),
            other => Err(EventHubError::InvalidFilter(format!(
                "expected all, upcoming, or completed, got '{other}'"
            ))),
        }
    }
}

/// A dashboard row for an event the user organizes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagedEvent {
    pub id: String,
    pub title: String,
    /// Display date, as on the catalog events.
    pub date: String,
    pub attendees: u32,
    pub capacity: u32,
    pub status: EventStatus,
    pub views: u32,
    pub registrations: u32,
}

/// Totals shown in the dashboard's stat tiles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_events: usize,
    pub total_attendees: u64,
    pub total_views: u64,
    pub total_registrations: u64,
}

impl DashboardSummary {
    pub fn from_events(events: &[ManagedEvent]) -> Self {
        DashboardSummary {
            total_events: events.len(),
            total_attendees: events.iter().map(|e| u64::from(e.attendees)).sum(),
            total_views: events.iter().map(|e| u64::from(e.views)).sum(),
            total_registrations: events.iter().map(|e| u64::from(e.registrations)).sum(),
        }
    }
}

/// Keep only the rows matching the status filter, in candidate order.
pub fn filter_by_status(events: &[ManagedEvent], filter: StatusFilter) -> Vec<ManagedEvent> {
    events
        .iter()
        .filter(|event| filter.matches(event.status))
        .cloned()
        .collect()
}

/// Managed events ranked by view count, highest first, truncated to `limit`.
pub fn top_performing(events: &[ManagedEvent], limit: usize) -> Vec<ManagedEvent> {
    let mut ranked: Vec<ManagedEvent> = events.to_vec();
    ranked.sort_by(|a, b| b.views.cmp(&a.views));
    ranked.truncate(limit);
    ranked
}

/// Ratio of `part` to `whole`, clamped to [0, 1]. Zero when `whole` is zero.
///
/// Used for the capacity and view bars.
pub fn fill_ratio(part: u32, whole: u32) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    (f64::from(part) / f64::from(whole)).clamp(0.0, 1.0)
}
