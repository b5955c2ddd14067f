//! Presenter state shared by the layout engine and the renderers

use crate::layout::{Point, RadialLayout, ZoomTransform};
use crate::navigation::{NavigationContext, NavigationEngine, DEFAULT_TRANSITION_DELAY};
use crate::slide::{Deck, SlideRecord};
use std::sync::Arc;
use std::time::Duration;

/// Default overview geometry
pub const DEFAULT_RADIUS: f64 = 280.0;
pub const DEFAULT_CENTER: Point = Point::new(350.0, 350.0);

/// Everything a view needs to draw one deck.
///
/// Passed explicitly to every view; cloning shares the same engine.
#[derive(Clone)]
pub struct PresenterContext {
    /// The deck being presented
    pub deck: Arc<Deck>,

    /// Navigation engine
    pub navigation: Arc<NavigationEngine>,

    /// Overview geometry, sized to the deck
    pub layout: RadialLayout,
}

impl PresenterContext {
    /// Context with the default geometry and transition delay
    pub fn new(deck: Arc<Deck>) -> Self {
        let layout = RadialLayout::new(deck.len(), DEFAULT_RADIUS, DEFAULT_CENTER);
        Self::with_layout(deck, layout, DEFAULT_TRANSITION_DELAY)
    }

    /// Context with custom geometry. The layout is resized to the deck length.
    pub fn with_layout(deck: Arc<Deck>, layout: RadialLayout, transition_delay: Duration) -> Self {
        let layout = RadialLayout::new(deck.len(), layout.radius(), layout.center())
            .with_zoom_factor(layout.zoom_factor());
        let navigation = Arc::new(NavigationEngine::with_transition_delay(
            deck.len(),
            transition_delay,
        ));

        Self {
            deck,
            navigation,
            layout,
        }
    }

    /// Snapshot of the navigation state
    pub fn snapshot(&self) -> NavigationContext {
        self.navigation.get_context()
    }

    /// Slide currently presented
    pub fn active_slide(&self) -> Option<&SlideRecord> {
        self.navigation
            .get_context()
            .active_index
            .and_then(|index| self.deck.get(index))
    }

    /// Slide being zoomed into
    pub fn pending_slide(&self) -> Option<&SlideRecord> {
        self.navigation
            .get_context()
            .pending_target
            .and_then(|index| self.deck.get(index))
    }

    /// Full zoom transform for the in-flight jump, identity otherwise
    pub fn zoom_target(&self) -> ZoomTransform {
        self.layout
            .zoom_transform(self.navigation.get_context().pending_target)
    }

    /// Zoom transform interpolated by `ease(progress)` of the in-flight jump
    pub fn eased_zoom(&self, ease: impl Fn(f32) -> f32) -> ZoomTransform {
        match self.navigation.transition_progress() {
            Some(progress) => self
                .zoom_target()
                .lerp_from_identity(ease(progress) as f64),
            None => ZoomTransform::IDENTITY,
        }
    }

    /// Tear down the engine; the context is unusable afterwards
    pub fn dispose(&self) {
        self.navigation.dispose();
    }
}
