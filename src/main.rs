mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "eventhub")]
#[command(about = "Discover, create, and manage events from your terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse and filter the event catalog
    Browse {
        /// Keep events whose title, description, or tags contain this text
        #[arg(short, long)]
        search: Option<String>,

        /// Only show one category (e.g. "Tech"), or "all"
        #[arg(short, long)]
        category: Option<String>,

        /// Price tier: all, free, or paid
        #[arg(short, long)]
        price: Option<String>,

        /// Sort order: latest, popular, price-asc, or price-desc
        #[arg(long)]
        sort: Option<String>,

        /// One event per line instead of full cards
        #[arg(long)]
        compact: bool,

        /// Emit JSON instead of formatted output
        #[arg(long)]
        json: bool,
    },
    /// Show full details for a single event
    Show {
        /// Event id (see `eventhub browse`)
        id: String,

        /// Emit JSON instead of formatted output
        #[arg(long)]
        json: bool,
    },
    /// Create a new event
    New {
        /// Event title
        title: String,

        /// Describe your event
        #[arg(short, long)]
        description: String,

        /// Display date (e.g. "March 20, 2025"); defaults to today
        #[arg(long)]
        date: Option<String>,

        /// Display time (e.g. "6:00 PM")
        #[arg(long)]
        time: String,

        /// Event location
        #[arg(short, long)]
        location: String,

        /// Maximum attendees
        #[arg(long)]
        capacity: u32,

        /// Event category (defaults to Tech)
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Track your own events: totals, status, and top performers
    Dashboard {
        /// Only show rows with this status: all, upcoming, or completed
        #[arg(short, long)]
        status: Option<String>,

        /// Emit JSON instead of formatted output
        #[arg(long)]
        json: bool,
    },
    /// Event counts per category
    Categories,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Browse {
            search,
            category,
            price,
            sort,
            compact,
            json,
        } => commands::browse::run(search, category, price, sort, compact, json),
        Commands::Show { id, json } => commands::show::run(&id, json),
        Commands::New {
            title,
            description,
            date,
            time,
            location,
            capacity,
            category,
        } => commands::new::run(title, description, date, time, location, capacity, category),
        Commands::Dashboard { status, json } => commands::dashboard::run(status, json),
        Commands::Categories => commands::categories::run(),
    }
}
