//! Geometry for the overview map

mod radial;

pub use radial::{Connector, RadialLayout, ZoomTransform, DEFAULT_ZOOM_FACTOR};

/// Point type used by the layout engine (f64, unrounded)
pub type Point = glam::DVec2;
