//! The detail view for a single event.

use anyhow::Result;
use eventhub_core::dashboard::fill_ratio;
use eventhub_core::error::EventHubError;
use eventhub_core::{event, fixtures};
use owo_colors::OwoColorize;

use crate::render::{render_bar, render_price};

pub fn run(id: &str, json: bool) -> Result<()> {
    let catalog = fixtures::sample_events();
    let event = event::find_by_id(&catalog, id)
        .ok_or_else(|| EventHubError::EventNotFound(id.to_string()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(event)?);
        return Ok(());
    }

    println!("{}  {}", event.title.bold(), format!("[{}]", event.category).cyan());
    println!();
    println!("{}", event.detail_text());
    println!();

    match &event.time {
        Some(time) => println!("  Date      {} · {}", event.date, time),
        None => println!("  Date      {}", event.date),
    }
    match &event.address {
        Some(address) => println!("  Location  {} ({})", event.location, address),
        None => println!("  Location  {}", event.location),
    }
    println!("  Price     {}", render_price(event.price));
    println!(
        "  Capacity  {} / {}  {}",
        event.attendees,
        event.max_attendees,
        render_bar(fill_ratio(event.attendees, event.max_attendees)),
    );
    if event.is_full() {
        println!("            {}", "This event is full".red());
    } else {
        println!("            {}", format!("{} spots left", event.spots_left()).dimmed());
    }

    if !event.tags.is_empty() {
        println!("  Tags      {}", event.tags.join(" · ").dimmed());
    }

    if !event.speakers.is_empty() {
        println!();
        println!("{}", "Speakers".bold());
        for speaker in &event.speakers {
            println!("  {} {}", speaker.name, format!("({})", speaker.title).dimmed());
        }
    }

    Ok(())
}
