//! Radial layout engine
//!
//! Places every slide on a circle, index 0 at 12 o'clock and proceeding
//! clockwise in screen coordinates (y grows downward). All functions are pure;
//! no rounding happens here.

use super::Point;

/// Zoom factor applied when jumping into a slide
pub const DEFAULT_ZOOM_FACTOR: f64 = 2.0;

/// Share of the target's offset from the centre that the zoom translates by
const ZOOM_TRANSLATE_RATIO: f64 = 0.5;

/// Radial placement of `count` nodes on a circle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialLayout {
    count: usize,
    radius: f64,
    center: Point,
    zoom_factor: f64,
}

/// Quadratic curve between two adjacent nodes, bowed through the centre
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connector {
    pub from: usize,
    pub to: usize,
    pub start: Point,
    pub control: Point,
    pub end: Point,
}

/// Scale + translate applied to the overview container
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomTransform {
    pub scale: f64,
    pub translate: Point,
}

impl RadialLayout {
    /// Create a layout for `count` slides
    pub fn new(count: usize, radius: f64, center: Point) -> Self {
        Self {
            count,
            radius,
            center,
            zoom_factor: DEFAULT_ZOOM_FACTOR,
        }
    }

    /// Override the zoom factor used by [`RadialLayout::zoom_transform`]
    pub fn with_zoom_factor(mut self, zoom_factor: f64) -> Self {
        self.zoom_factor = zoom_factor;
        self
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn zoom_factor(&self) -> f64 {
        self.zoom_factor
    }

    /// Angle of node `index` in degrees, `-90` for index 0
    pub fn angle_degrees(&self, index: usize) -> f64 {
        if self.count == 0 {
            return -90.0;
        }
        (index as f64 / self.count as f64) * 360.0 - 90.0
    }

    /// Position of node `index` on the circle
    pub fn node_position(&self, index: usize) -> Point {
        let theta = self.angle_degrees(index) * std::f64::consts::PI / 180.0;
        Point::new(
            self.center.x + self.radius * theta.cos(),
            self.center.y + self.radius * theta.sin(),
        )
    }

    /// Connector from node `index` to its successor, wrapping `N-1 -> 0`
    pub fn connector(&self, index: usize) -> Connector {
        let to = if self.count == 0 {
            0
        } else {
            (index + 1) % self.count
        };

        Connector {
            from: index,
            to,
            start: self.node_position(index),
            control: self.center,
            end: self.node_position(to),
        }
    }

    /// Transform that zooms the container into `target`.
    ///
    /// `None` (no transition in flight) yields the identity.
    pub fn zoom_transform(&self, target: Option<usize>) -> ZoomTransform {
        match target {
            Some(index) => {
                let position = self.node_position(index);
                ZoomTransform {
                    scale: self.zoom_factor,
                    translate: -(position - self.center) * ZOOM_TRANSLATE_RATIO,
                }
            }
            None => ZoomTransform::IDENTITY,
        }
    }

    /// All node positions in deck order
    pub fn node_positions(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.count).map(move |index| self.node_position(index))
    }

    /// All connectors, including the wrap-around edge
    pub fn connectors(&self) -> impl Iterator<Item = Connector> + '_ {
        (0..self.count).map(move |index| self.connector(index))
    }
}

impl Connector {
    /// Evaluate the curve at `t` in `[0, 1]`
    pub fn point_at(&self, t: f64) -> Point {
        let u = 1.0 - t;
        self.start * (u * u) + self.control * (2.0 * u * t) + self.end * (t * t)
    }
}

impl ZoomTransform {
    pub const IDENTITY: ZoomTransform = ZoomTransform {
        scale: 1.0,
        translate: Point::ZERO,
    };

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Map a container point through the transform.
    ///
    /// Composition is translate first, then scale about `origin` (the
    /// container centre), the same order as CSS `scale(s) translate(t)`.
    pub fn apply(&self, point: Point, origin: Point) -> Point {
        origin + (point + self.translate - origin) * self.scale
    }

    /// Interpolate from the identity (`t = 0`) to `self` (`t = 1`)
    pub fn lerp_from_identity(&self, t: f64) -> ZoomTransform {
        let t = t.clamp(0.0, 1.0);
        ZoomTransform {
            scale: 1.0 + (self.scale - 1.0) * t,
            translate: self.translate * t,
        }
    }
}

impl Default for ZoomTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
