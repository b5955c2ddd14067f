//! Core functionality for the radial deck presenter
//!
//! This crate provides the slide model, the navigation state machine, the
//! radial layout engine and keyboard routing. Nothing here draws.

pub mod input;
pub mod layout;
pub mod navigation;
pub mod render;
pub mod slide;
pub mod state;

// Re-export commonly used types
pub use input::{intent_for_key, InputRouter, Intent};
pub use layout::{Connector, Point, RadialLayout, ZoomTransform};
pub use navigation::{
    Direction, NavigationContext, NavigationEngine, NavigationError, NavigationMode,
    NavigationSubscriber,
};
pub use render::SlideRenderer;
pub use slide::{Deck, SlideBody, SlideId, SlideRecord};
pub use state::PresenterContext;
