//! The create-event form.
//!
//! Created events are confirmed and then discarded: there is no backing
//! store, so nothing outlives the process.

use anyhow::Result;
use eventhub_core::draft::{EventDraft, default_display_date};
use eventhub_core::event::Category;
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run(
    title: String,
    description: String,
    date: Option<String>,
    time: String,
    location: String,
    capacity: u32,
    category: Option<String>,
) -> Result<()> {
    // The form pre-selects Tech
    let category = match category {
        Some(s) => s.parse::<Category>()?,
        None => Category::Tech,
    };

    let draft = EventDraft {
        title,
        description,
        category,
        date: date.unwrap_or_else(default_display_date),
        time,
        location,
        capacity,
    };

    let event = draft.build()?;

    println!("{} {}", "✓".green(), "Event created successfully!".bold());
    println!();
    println!("{}", event.render());
    println!();
    println!(
        "{}",
        "Events live in memory only; run `eventhub browse` to explore the catalog.".dimmed()
    );

    Ok(())
}
