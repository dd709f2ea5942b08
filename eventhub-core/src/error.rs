//! Error types for the eventhub ecosystem.

use thiserror::Error;

/// Errors that can occur in eventhub operations.
#[derive(Error, Debug)]
pub enum EventHubError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    #[error("Invalid event draft: {0}")]
    InvalidDraft(String),
}

/// Result type alias for eventhub operations.
pub type EventHubResult<T> = Result<T, EventHubError>;
