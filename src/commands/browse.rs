//! The listing view: owns the query state and re-invokes the engine.

use anyhow::Result;
use eventhub_core::config::EventHubConfig;
use eventhub_core::fixtures;
use eventhub_core::query::{self, CategoryFilter, PriceFilter, QueryParams, SortKey};
use owo_colors::OwoColorize;

use crate::render::{Render, pluralize, render_compact};

pub fn run(
    search: Option<String>,
    category: Option<String>,
    price: Option<String>,
    sort: Option<String>,
    compact: bool,
    json: bool,
) -> Result<()> {
    let cfg = EventHubConfig::load()?;

    // Flags win over config defaults
    let category = category.or(cfg.default_category);
    let sort = sort.or(cfg.default_sort);

    let params = QueryParams {
        search_term: search.unwrap_or_default(),
        category: match category {
            Some(s) => CategoryFilter::from_arg(&s)?,
            None => CategoryFilter::All,
        },
        price: match price {
            Some(s) => PriceFilter::from_arg(&s)?,
            None => PriceFilter::All,
        },
        sort: sort.as_deref().map(SortKey::from_arg).unwrap_or_default(),
    };

    let catalog = fixtures::sample_events();
    let results = query::search(&catalog, &params);

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("{}", "No events match your filters".bold());
        println!("{}", "Try adjusting your search or filters".dimmed());
        return Ok(());
    }

    println!(
        "{} {}",
        results.len().to_string().bold(),
        pluralize("event", results.len()),
    );
    println!();

    if compact {
        for event in &results {
            println!("{}", render_compact(event));
        }
    } else {
        for event in &results {
            println!("{}", event.render());
            println!();
        }
    }

    Ok(())
}
