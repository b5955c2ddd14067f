//! Renderer boundary
//!
//! The core never draws. Hosts implement [`SlideRenderer`] and drive it with
//! [`crate::NavigationContext::render_with`].

use crate::navigation::Direction;
use crate::slide::SlideRecord;

/// Produces the visual content of a single slide
pub trait SlideRenderer {
    /// Called once per slide per frame. `is_active` is true for at most one record.
    fn render_slide(&mut self, record: &SlideRecord, is_active: bool, direction: Direction);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::{NavigationContext, NavigationMode};
    use crate::slide::{Deck, SlideBody};

    #[derive(Default)]
    struct Recorder {
        calls: usize,
        active_ids: Vec<u32>,
    }

    impl SlideRenderer for Recorder {
        fn render_slide(&mut self, record: &SlideRecord, is_active: bool, _direction: Direction) {
            self.calls += 1;
            if is_active {
                self.active_ids.push(record.id);
            }
        }
    }

    #[test]
    fn test_renderer_sees_every_slide() {
        let slides = (1..=3)
            .map(|id| SlideRecord {
                id,
                title: format!("Slide {}", id),
                subtitle: None,
                glyph: None,
                authors: Vec::new(),
                body: SlideBody::Cover,
            })
            .collect();
        let deck = Deck::new("Test", slides);

        let mut context = NavigationContext::initial(deck.len());
        context.mode = NavigationMode::Presenting;
        context.active_index = Some(0);

        let mut recorder = Recorder::default();
        context.render_with(&deck, &mut recorder);

        assert_eq!(recorder.calls, 3);
        assert_eq!(recorder.active_ids, vec![1]);
    }
}
