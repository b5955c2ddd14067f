//! Deck catalog: reading and validating slide decks

mod builtin;

pub use builtin::{builtin_deck, BUILTIN_DECK_JSON};

use crate::DeckError;
use deck_core::Deck;
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

/// Check that a deck can drive the navigation engine.
///
/// Rejects empty decks, duplicate ids and blank titles.
pub fn validate(deck: &Deck) -> Result<(), DeckError> {
    if deck.is_empty() {
        return Err(DeckError::EmptyDeck);
    }

    let mut seen = HashSet::with_capacity(deck.len());
    for (position, slide) in deck.iter().enumerate() {
        if !seen.insert(slide.id) {
            return Err(DeckError::DuplicateSlideId(slide.id));
        }
        if slide.title.trim().is_empty() {
            return Err(DeckError::InvalidSlide {
                position,
                reason: format!("slide {} has a blank title", slide.id),
            });
        }
    }

    Ok(())
}

/// Parse and validate a deck from JSON text
pub fn parse_deck(json: &str) -> Result<Deck, DeckError> {
    let deck: Deck = serde_json::from_str(json)?;
    validate(&deck)?;
    Ok(deck)
}

/// Read a deck file from disk
pub fn load_deck(path: &Path) -> Result<Deck, DeckError> {
    info!("Loading deck from {:?}", path);
    let json = std::fs::read_to_string(path)?;
    let deck = parse_deck(&json)?;
    info!("Loaded {} slides from {:?}", deck.len(), path);
    Ok(deck)
}
