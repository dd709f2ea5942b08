//! The dashboard: stat tiles, the managed-events table, and top performers.

use anyhow::Result;
use eventhub_core::dashboard::{self, DashboardSummary, StatusFilter, fill_ratio};
use eventhub_core::fixtures;
use owo_colors::OwoColorize;

use crate::render::{Render, pluralize, render_bar};

/// How many rows the top-performing section shows.
const TOP_PERFORMING: usize = 3;

pub fn run(status: Option<String>, json: bool) -> Result<()> {
    let filter = match status {
        Some(s) => StatusFilter::from_arg(&s)?,
        None => StatusFilter::All,
    };

    let events = fixtures::managed_events();
    // Tiles summarize the whole set; the filter narrows the table only
    let summary = DashboardSummary::from_events(&events);
    let rows = dashboard::filter_by_status(&events, filter);

    if json {
        let payload = serde_json::json!({
            "summary": summary,
            "events": rows,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!("{}", "Event Dashboard".bold());
    println!("{}", "Manage and track your events".dimmed());
    println!();

    print_tile("Total Events", summary.total_events as u64);
    print_tile("Total Attendees", summary.total_attendees);
    print_tile("Total Views", summary.total_views);
    print_tile("Registrations", summary.total_registrations);
    println!();

    println!(
        "{} {}",
        "Your Events".bold(),
        format!("({} {})", rows.len(), pluralize("event", rows.len())).dimmed(),
    );
    if rows.is_empty() {
        println!("{}", "  No events found".dimmed());
        println!("{}", "  Create your first event with `eventhub new`".dimmed());
    } else {
        for row in &rows {
            println!("  {}", row.render());
        }
    }
    println!();

    println!("{}", "Top Performing Events".bold());
    let top = dashboard::top_performing(&events, TOP_PERFORMING);
    let most_viewed = top.first().map(|e| e.views).unwrap_or(0);
    for event in &top {
        println!(
            "  {:<28} {:>6} views  {}",
            event.title,
            event.views,
            render_bar(fill_ratio(event.views, most_viewed)),
        );
    }

    Ok(())
}

fn print_tile(label: &str, value: u64) {
    println!("  {:<16} {}", label.dimmed(), value.to_string().bold());
}
