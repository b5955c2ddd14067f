use serde::{Serialize, Deserialize};
use thiserror::Error;

mod engine;
mod subscriber;
mod timer;

pub use engine::{NavigationEngine, DEFAULT_TRANSITION_DELAY};
pub use subscriber::NavigationSubscriber;
pub use timer::{CompletionQueue, PendingCompletion};

use crate::render::SlideRenderer;
use crate::slide::{Deck, SlideRecord};

/// Top-level presentation mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationMode {
    /// Radial map of every slide, nothing active
    Overview,
    /// Zooming into a selected slide; completes after the transition delay
    Transitioning,
    /// A single active slide with sequential navigation
    Presenting,
}

/// Cause of the most recent navigation, used to pick a transition treatment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Forward,
    Backward,
    Jump,
}

/// Snapshot of the navigation state handed to renderers and subscribers
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationContext {
    pub mode: NavigationMode,
    /// Active slide; `None` is the "no slide active" sentinel (overview only)
    pub active_index: Option<usize>,
    pub direction: Direction,
    /// Slide being zoomed into; set only while transitioning
    pub pending_target: Option<usize>,
    pub transition_token: u64,
    /// Deck length `N`, fixed for the engine's lifetime
    pub slide_count: usize,
}

/// Reasons an intent is turned away. State never changes on rejection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    #[error("slide {index} out of range (deck has {count} slides)")]
    OutOfRange { index: usize, count: usize },

    #[error("{intent} ignored while {mode:?}")]
    NotPresenting { intent: &'static str, mode: NavigationMode },

    #[error("navigation state has been disposed")]
    Disposed,
}

impl NavigationContext {
    /// Initial snapshot: overview, nothing active
    pub fn initial(slide_count: usize) -> Self {
        Self {
            mode: NavigationMode::Overview,
            active_index: None,
            direction: Direction::Jump,
            pending_target: None,
            transition_token: 0,
            slide_count,
        }
    }

    /// Active index in the `[-1, N-1]` form, `-1` meaning none
    pub fn active_index_or_sentinel(&self) -> isize {
        self.active_index.map(|index| index as isize).unwrap_or(-1)
    }

    pub fn is_overview(&self) -> bool {
        self.mode == NavigationMode::Overview
    }

    pub fn is_presenting(&self) -> bool {
        self.mode == NavigationMode::Presenting
    }

    pub fn is_transitioning(&self) -> bool {
        self.mode == NavigationMode::Transitioning
    }

    /// Whether the slide at `position` is the one being presented
    pub fn is_active(&self, position: usize) -> bool {
        self.mode == NavigationMode::Presenting && self.active_index == Some(position)
    }

    pub fn is_first(&self) -> bool {
        self.active_index == Some(0)
    }

    pub fn is_last(&self) -> bool {
        self.active_index == Some(self.slide_count.saturating_sub(1))
    }

    /// Fraction of the deck reached, `(i + 1) / N`; zero when nothing is active
    pub fn progress(&self) -> f32 {
        match self.active_index {
            Some(index) if self.slide_count > 0 => (index + 1) as f32 / self.slide_count as f32,
            _ => 0.0,
        }
    }

    /// Check the mode/index invariants
    pub fn is_consistent(&self) -> bool {
        let in_range = |index: usize| index < self.slide_count;
        match self.mode {
            NavigationMode::Overview => self.active_index.is_none() && self.pending_target.is_none(),
            NavigationMode::Transitioning => self.pending_target.map_or(false, in_range),
            NavigationMode::Presenting => self.active_index.map_or(false, in_range),
        }
    }

    /// Invoke `render` once per slide with its active flag and the last direction.
    ///
    /// At most one record is reported active.
    pub fn for_each_slide<F>(&self, deck: &Deck, mut render: F)
    where
        F: FnMut(&SlideRecord, bool, Direction),
    {
        for (position, record) in deck.iter().enumerate() {
            render(record, self.is_active(position), self.direction);
        }
    }

    /// Drive a [`SlideRenderer`] over the deck
    pub fn render_with<R: SlideRenderer + ?Sized>(&self, deck: &Deck, renderer: &mut R) {
        self.for_each_slide(deck, |record, is_active, direction| {
            renderer.render_slide(record, is_active, direction);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slide::{SlideBody, SlideRecord};

    fn deck(count: u32) -> Deck {
        let slides = (1..=count)
            .map(|id| SlideRecord {
                id,
                title: format!("Slide {}", id),
                subtitle: None,
                glyph: None,
                authors: Vec::new(),
                body: SlideBody::Cover,
            })
            .collect();
        Deck::new("Test", slides)
    }

    #[test]
    fn test_initial_context_is_overview() {
        let context = NavigationContext::initial(5);
        assert!(context.is_overview());
        assert_eq!(context.active_index_or_sentinel(), -1);
        assert!(context.is_consistent());
        assert_eq!(context.progress(), 0.0);
    }

    #[test]
    fn test_for_each_slide_marks_single_active() {
        let deck = deck(4);
        let mut context = NavigationContext::initial(4);
        context.mode = NavigationMode::Presenting;
        context.active_index = Some(2);
        context.direction = Direction::Forward;

        let mut seen = Vec::new();
        context.for_each_slide(&deck, |record, is_active, direction| {
            assert_eq!(direction, Direction::Forward);
            seen.push((record.id, is_active));
        });

        assert_eq!(seen.len(), 4);
        assert_eq!(seen.iter().filter(|(_, active)| *active).count(), 1);
        assert_eq!(seen[2], (3, true));
    }

    #[test]
    fn test_nothing_active_outside_presenting() {
        let deck = deck(3);
        let mut context = NavigationContext::initial(3);
        context.mode = NavigationMode::Transitioning;
        context.pending_target = Some(1);

        let mut active = 0;
        context.for_each_slide(&deck, |_, is_active, _| {
            if is_active {
                active += 1;
            }
        });
        assert_eq!(active, 0);
    }

    #[test]
    fn test_consistency_rejects_broken_states() {
        let mut context = NavigationContext::initial(3);
        context.active_index = Some(1);
        assert!(!context.is_consistent());

        let mut context = NavigationContext::initial(3);
        context.mode = NavigationMode::Presenting;
        context.active_index = Some(3);
        assert!(!context.is_consistent());
    }
}
