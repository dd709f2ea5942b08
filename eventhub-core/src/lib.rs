//! Core types for the eventhub ecosystem.
//!
//! This crate provides everything the presentational surfaces share:
//! - `Event` and related types for the catalog
//! - `query` module for the pure filter/sort engine behind the listing view
//! - `draft` module for turning create-form input into events
//! - `dashboard` module for aggregating the user's own events
//! - `fixtures` module with the in-memory catalog

pub mod config;
pub mod dashboard;
pub mod draft;
pub mod error;
pub mod event;
pub mod fixtures;
pub mod query;

// Re-export the event and query types at crate root for convenience
pub use error::{EventHubError, EventHubResult};
pub use event::*;
pub use query::*;
