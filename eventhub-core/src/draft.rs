//! Create-event form state and validation.
//!
//! An `EventDraft` mirrors the create form field-for-field. `build` applies
//! the form's own rules (every field required, capacity at least 1) and
//! produces a fresh `Event` with a generated id and no registrants.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EventHubError, EventHubResult};
use crate::event::{Category, Event};

/// Unvalidated create-form state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub category: Category,
    /// Display date, e.g. "March 20, 2025".
    pub date: String,
    /// Display time, e.g. "6:00 PM".
    pub time: String,
    pub location: String,
    pub capacity: u32,
}

impl EventDraft {
    /// Validate the draft and produce a new `Event`.
    ///
    /// The event gets a generated `evt-` id, zero attendees, and no price.
    /// Created events are free; the form carries no price field.
    pub fn build(self) -> EventHubResult<Event> {
        require_field("title", &self.title)?;
        require_field("description", &self.description)?;
        require_field("date", &self.date)?;
        require_field("time", &self.time)?;
        require_field("location", &self.location)?;

        if self.capacity == 0 {
            return Err(EventHubError::InvalidDraft(
                "capacity must be at least 1".to_string(),
            ));
        }

        Ok(Event {
            id: format!("evt-{}", Uuid::new_v4()),
            title: self.title,
            description: self.description,
            full_description: None,
            date: self.date,
            time: Some(self.time),
            location: self.location,
            address: None,
            attendees: 0,
            max_attendees: self.capacity,
            image: None,
            category: self.category,
            tags: Vec::new(),
            price: 0.0,
            speakers: Vec::new(),
        })
    }
}

fn require_field(name: &str, value: &str) -> EventHubResult<()> {
    if value.trim().is_empty() {
        return Err(EventHubError::InvalidDraft(format!("{name} is required")));
    }
    Ok(())
}

/// Today's date in the catalog's display format, e.g. "March 15, 2025".
pub fn default_display_date() -> String {
    Utc::now().format("%B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_draft() -> EventDraft {
        EventDraft {
            title: "Rust Meetup".to_string(),
            description: "Monthly meetup for Rust developers".to_string(),
            category: Category::Tech,
            date: "April 2, 2025".to_string(),
            time: "6:00 PM".to_string(),
            location: "Denver, CO".to_string(),
            capacity: 80,
        }
    }

    #[test]
    fn valid_draft_builds_a_fresh_event() {
        let event = make_draft().build().unwrap();
        assert!(event.id.starts_with("evt-"));
        assert_eq!(event.attendees, 0);
        assert_eq!(event.max_attendees, 80);
        assert!(event.is_free());
        assert_eq!(event.time.as_deref(), Some("6:00 PM"));
        assert!(event.tags.is_empty());
    }

    #[test]
    fn each_build_generates_a_unique_id() {
        let a = make_draft().build().unwrap();
        let b = make_draft().build().unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn empty_required_fields_are_rejected() {
        for field in ["title", "description", "date", "time", "location"] {
            let mut draft = make_draft();
            match field {
                "title" => draft.title = String::new(),
                "description" => draft.description = "   ".to_string(),
                "date" => draft.date = String::new(),
                "time" => draft.time = String::new(),
                "location" => draft.location = String::new(),
                _ => unreachable!(),
            }
            let err = draft.build().unwrap_err();
            assert!(
                err.to_string().contains(field),
                "expected error naming {field}, got: {err}"
            );
        }
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let mut draft = make_draft();
        draft.capacity = 0;
        assert!(draft.build().is_err());
    }

    #[test]
    fn default_date_is_display_text() {
        let date = default_display_date();
        // "March 15, 2025" shape: month word, day, comma, year
        assert!(date.contains(','));
        assert!(date.split_whitespace().count() == 3);
    }
}
