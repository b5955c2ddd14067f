//! The deck shipped with the binary

use super::parse_deck;
use crate::DeckError;
use deck_core::Deck;

/// Source of the bundled deck
pub const BUILTIN_DECK_JSON: &str = include_str!("../../assets/virtualization.json");

/// Parse the bundled virtualization deck
pub fn builtin_deck() -> Result<Deck, DeckError> {
    parse_deck(BUILTIN_DECK_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_core::slide::{ContentBody, DiagramBody, SlideBody};

    #[test]
    fn test_builtin_deck_has_nineteen_slides() {
        let deck = builtin_deck().unwrap();
        assert_eq!(deck.len(), 19);

        let ids: Vec<_> = deck.iter().map(|slide| slide.id).collect();
        assert_eq!(ids, (1..=19).collect::<Vec<_>>());
    }

    #[test]
    fn test_builtin_deck_variants() {
        let deck = builtin_deck().unwrap();
        assert_eq!(deck.get(0).unwrap().body, SlideBody::Cover);
        assert_eq!(deck.get(0).unwrap().authors.len(), 4);
        assert_eq!(deck.get(18).unwrap().body, SlideBody::ThankYou);

        match &deck.get(5).unwrap().body {
            SlideBody::Diagram {
                body: DiagramBody::Cards(cards),
            } => {
                assert_eq!(cards.len(), 2);
                assert!(cards[1].highlight);
                assert!(!cards[0].highlight);
            }
            other => panic!("unexpected body {:?}", other),
        }

        match &deck.get(12).unwrap().body {
            SlideBody::Content {
                body: ContentBody::Specs(specs),
            } => assert_eq!(specs[1].value, "4 Go"),
            other => panic!("unexpected body {:?}", other),
        }

        match &deck.get(14).unwrap().body {
            SlideBody::Terminal { prompt, commands } => {
                assert_eq!(prompt, "ubuntu@vm:~$");
                assert_eq!(commands.len(), 3);
            }
            other => panic!("unexpected body {:?}", other),
        }
    }

    #[test]
    fn test_every_builtin_slide_has_a_glyph() {
        let deck = builtin_deck().unwrap();
        assert!(deck.iter().all(|slide| slide.glyph.is_some()));
    }
}
