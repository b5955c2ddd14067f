//! Deck loading and presenter configuration

pub mod catalog;
pub mod config;

use deck_core::SlideId;
use thiserror::Error;

// Re-exports
pub use catalog::{builtin_deck, load_deck, parse_deck, validate};
pub use config::PresenterConfig;

/// Errors that can occur while loading decks or configuration
#[derive(Error, Debug)]
pub enum DeckError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Deck has no slides")]
    EmptyDeck,

    #[error("Duplicate slide id {0}")]
    DuplicateSlideId(SlideId),

    #[error("Invalid slide at position {position}: {reason}")]
    InvalidSlide { position: usize, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),
}
