//! Category overview: event counts per category.

use anyhow::Result;
use eventhub_core::fixtures;
use eventhub_core::query::category_counts;
use owo_colors::OwoColorize;

use crate::render::pluralize;

pub fn run() -> Result<()> {
    let catalog = fixtures::sample_events();

    println!("{}", "Explore by Category".bold());
    println!();

    for (category, count) in category_counts(&catalog) {
        let label = format!("{count} {}", pluralize("event", count));
        if count == 0 {
            println!("  {:<12} {}", category.to_string().dimmed(), label.dimmed());
        } else {
            println!("  {:<12} {}", category.to_string().bold(), label);
        }
    }

    println!();
    println!("{}", "Filter with `eventhub browse --category <name>`".dimmed());

    Ok(())
}
