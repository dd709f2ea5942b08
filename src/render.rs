//! Terminal rendering for eventhub types.
//!
//! This module provides extension traits that add colored terminal rendering
//! to eventhub-core types using owo_colors.

use eventhub_core::dashboard::{EventStatus, ManagedEvent, fill_ratio};
use eventhub_core::event::Event;
use owo_colors::OwoColorize;

/// Width of capacity and view bars, in characters.
const BAR_WIDTH: usize = 20;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Event {
    /// Multi-line card, the default browse layout.
    fn render(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!(
            "{}  {}  {}",
            self.title.bold(),
            badge(&self.category.to_string()),
            render_price(self.price),
        ));
        lines.push(format!("   {}", self.description));
        lines.push(format!(
            "   {}  {}  {}",
            self.date,
            self.location,
            format!("{} / {} attending", self.attendees, self.max_attendees).dimmed(),
        ));
        if !self.tags.is_empty() {
            lines.push(format!("   {}", self.tags.join(" · ").dimmed()));
        }
        lines.push(format!("   {}", format!("id: {}", self.id).dimmed()));

        lines.join("\n")
    }
}

impl Render for EventStatus {
    fn render(&self) -> String {
        match self {
            EventStatus::Upcoming => self.to_string().green().to_string(),
            EventStatus::Completed => self.to_string().dimmed().to_string(),
        }
    }
}

impl Render for ManagedEvent {
    fn render(&self) -> String {
        let capacity = format!("{}/{}", self.attendees, self.capacity);
        format!(
            "{:<28} {:<16} {:>9}  {}  {}",
            self.title.bold(),
            self.date.dimmed(),
            capacity,
            render_bar(fill_ratio(self.attendees, self.capacity)),
            self.status.render(),
        )
    }
}

/// Single-line row for the compact browse layout.
pub fn render_compact(event: &Event) -> String {
    format!(
        "{:>5}  {}  {}  {}",
        plain_price(event.price),
        event.title.bold(),
        badge(&event.category.to_string()),
        format!("{}, {}", event.date, event.location).dimmed(),
    )
}

/// "Free" in green, otherwise a yellow dollar amount.
pub fn render_price(price: f64) -> String {
    if price == 0.0 {
        "Free".green().to_string()
    } else {
        plain_price(price).yellow().to_string()
    }
}

fn plain_price(price: f64) -> String {
    if price == 0.0 {
        "Free".to_string()
    } else {
        format!("${price}")
    }
}

fn badge(label: &str) -> String {
    format!("[{label}]").cyan().to_string()
}

/// Fixed-width progress bar, e.g. `██████░░░░░░░░░░░░░░ 49%`.
pub fn render_bar(ratio: f64) -> String {
    let filled = ((ratio * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
    format!(
        "{}{} {:>3.0}%",
        "█".repeat(filled),
        "░".repeat(BAR_WIDTH - filled),
        ratio * 100.0,
    )
}

/// Simple pluralization helper.
pub fn pluralize(word: &str, count: usize) -> &str {
    if count == 1 {
        word
    } else {
        match word {
            "event" => "events",
            _ => word,
        }
    }
}
