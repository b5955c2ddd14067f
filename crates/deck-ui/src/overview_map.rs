//! Radial overview map
//!
//! Paints every slide as a node on the circle computed by
//! [`deck_core::RadialLayout`] and zooms into the clicked node while the jump
//! is in flight.

use crate::icons;
use crate::theme;
use crate::widget_utils::WidgetId;
use deck_core::{
    NavigationContext, NavigationSubscriber, Point, PresenterContext, ZoomTransform,
};
use egui::{Align2, Color32, FontId, Pos2, Rect, Sense, Shape, Stroke, Ui, Vec2};
use parking_lot::RwLock;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::debug;

/// Curve samples per connector
const CONNECTOR_SEGMENTS: usize = 24;
/// Segments for the dashed outer ring
const RING_SEGMENTS: usize = 96;
/// Height reserved for the deck title and hint
const HEADER_HEIGHT: f32 = 72.0;

/// Overview map configuration
#[derive(Debug, Clone)]
pub struct OverviewMapConfig {
    /// Node radius in layout units
    pub node_radius: f32,

    /// Gap between the node circle and the dashed ring
    pub ring_padding: f32,

    /// How far the background halo extends past the node circle
    pub halo_padding: f32,

    /// Radius of the centre hub
    pub hub_radius: f32,
}

impl Default for OverviewMapConfig {
    fn default() -> Self {
        Self {
            node_radius: 40.0,
            ring_padding: 20.0,
            halo_padding: 50.0,
            hub_radius: 40.0,
        }
    }
}

/// Slides that have been presented at least once
#[derive(Debug, Default)]
pub struct VisitedSlides {
    visited: RwLock<BTreeSet<usize>>,
}

impl VisitedSlides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visited(&self, index: usize) -> bool {
        self.visited.read().contains(&index)
    }

    pub fn count(&self) -> usize {
        self.visited.read().len()
    }

    pub fn clear(&self) {
        self.visited.write().clear();
    }
}

impl NavigationSubscriber for VisitedSlides {
    fn on_navigation_change(&self, context: &NavigationContext) {
        if let (true, Some(index)) = (context.is_presenting(), context.active_index) {
            self.visited.write().insert(index);
        }
    }
}

/// Ease-out cubic used for the zoom
pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Maps layout coordinates to screen coordinates for one frame
#[derive(Debug, Clone, Copy)]
struct MapFrame {
    origin: Pos2,
    layout_center: Point,
    fit: f32,
    zoom: ZoomTransform,
}

impl MapFrame {
    fn new(area: Rect, layout_center: Point, extent: f64, zoom: ZoomTransform) -> Self {
        let fit = if extent > 0.0 {
            (area.width().min(area.height()) / (2.0 * extent as f32)).max(0.0)
        } else {
            1.0
        };

        Self {
            origin: area.center(),
            layout_center,
            fit,
            zoom,
        }
    }

    fn to_screen(&self, point: Point) -> Pos2 {
        let offset = self.zoom.apply(point, self.layout_center) - self.layout_center;
        self.origin + Vec2::new(offset.x as f32, offset.y as f32) * self.fit
    }

    /// Screen length of `length` layout units
    fn scale(&self, length: f32) -> f32 {
        length * self.fit * self.zoom.scale as f32
    }
}

/// The radial overview
pub struct OverviewMap {
    config: OverviewMapConfig,
    visited: Arc<VisitedSlides>,
}

impl OverviewMap {
    /// Create a new overview map
    pub fn new(config: OverviewMapConfig) -> Self {
        Self {
            config,
            visited: Arc::new(VisitedSlides::new()),
        }
    }

    /// Visited-slide tracker; register it with the engine as a subscriber
    pub fn visited(&self) -> Arc<VisitedSlides> {
        self.visited.clone()
    }

    /// Draw the map and handle node clicks
    pub fn ui(&mut self, ui: &mut Ui, context: &PresenterContext) {
        let snapshot = context.snapshot();
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::hover());
        let rect = response.rect;

        painter.rect_filled(rect, 0.0, theme::background_color());
        self.draw_header(&painter, rect, context);

        let map_area = Rect::from_min_max(rect.min + Vec2::new(0.0, HEADER_HEIGHT), rect.max);
        let layout = &context.layout;
        let extent = layout.radius() + self.config.halo_padding as f64;
        let zoom = context.eased_zoom(ease_out);
        let frame = MapFrame::new(map_area, layout.center(), extent, zoom);

        let painter = painter.with_clip_rect(map_area);
        self.draw_halo(&painter, &frame, layout.radius());
        self.draw_ring(&painter, &frame, layout.radius());

        // Connectors only make sense on the resting map
        if !snapshot.is_transitioning() {
            self.draw_connectors(&painter, &frame, context);
        }
        self.draw_hub(&painter, &frame, layout.center());

        for index in 0..layout.count() {
            self.node_ui(ui, &painter, &frame, context, &snapshot, index);
        }

        self.draw_footer(&painter, rect, context.deck.len());

        if snapshot.is_transitioning() {
            ui.ctx().request_repaint();
        }
    }

    fn draw_header(&self, painter: &egui::Painter, rect: Rect, context: &PresenterContext) {
        let title = if context.deck.title.is_empty() {
            "Deck"
        } else {
            context.deck.title.as_str()
        };
        painter.text(
            Pos2::new(rect.center().x, rect.top() + 24.0),
            Align2::CENTER_CENTER,
            title,
            FontId::proportional(26.0),
            theme::text_main_color(),
        );
        painter.text(
            Pos2::new(rect.center().x, rect.top() + 54.0),
            Align2::CENTER_CENTER,
            "Click a slide to open it · ← → to move · Esc returns to the map",
            FontId::proportional(14.0),
            theme::text_muted_color(),
        );
    }

    /// Radial glow behind the nodes, stacked translucent discs
    fn draw_halo(&self, painter: &egui::Painter, frame: &MapFrame, radius: f64) {
        let outer = radius as f32 + self.config.halo_padding;
        let steps = 14;
        let center = frame.to_screen(frame.layout_center);
        for step in 0..steps {
            let t = step as f32 / steps as f32;
            let color = theme::mix(theme::secondary_color(), theme::primary_color(), t);
            let [r, g, b, _] = color.to_array();
            painter.circle_filled(
                center,
                frame.scale(outer * (1.0 - t)),
                Color32::from_rgba_unmultiplied(r, g, b, 3),
            );
        }
    }

    fn draw_ring(&self, painter: &egui::Painter, frame: &MapFrame, radius: f64) {
        let ring = radius + self.config.ring_padding as f64;
        let points: Vec<Pos2> = (0..=RING_SEGMENTS)
            .map(|i| {
                let theta = i as f64 / RING_SEGMENTS as f64 * std::f64::consts::TAU;
                let point = frame.layout_center + Point::new(theta.cos(), theta.sin()) * ring;
                frame.to_screen(point)
            })
            .collect();

        painter.extend(Shape::dashed_line(
            &points,
            Stroke::new(1.5, theme::primary_color().linear_multiply(0.3)),
            frame.scale(10.0),
            frame.scale(5.0),
        ));
    }

    fn draw_connectors(&self, painter: &egui::Painter, frame: &MapFrame, context: &PresenterContext) {
        // A single slide would connect to itself
        if context.layout.count() < 2 {
            return;
        }

        let stroke = Stroke::new(1.0, theme::primary_color().linear_multiply(0.35));
        for connector in context.layout.connectors() {
            let points: Vec<Pos2> = (0..=CONNECTOR_SEGMENTS)
                .map(|i| frame.to_screen(connector.point_at(i as f64 / CONNECTOR_SEGMENTS as f64)))
                .collect();
            painter.extend(Shape::dashed_line(
                &points,
                stroke,
                frame.scale(5.0),
                frame.scale(5.0),
            ));
        }
    }

    fn draw_hub(&self, painter: &egui::Painter, frame: &MapFrame, center: Point) {
        let position = frame.to_screen(center);
        let radius = frame.scale(self.config.hub_radius);
        painter.circle(
            position,
            radius,
            theme::mix(theme::primary_color(), theme::secondary_color(), 0.5),
            Stroke::new(frame.scale(4.0), Color32::from_white_alpha(50)),
        );
        painter.text(
            position,
            Align2::CENTER_CENTER,
            icons::HUB,
            FontId::proportional(radius * 0.8),
            Color32::WHITE,
        );
    }

    fn node_ui(
        &self,
        ui: &mut Ui,
        painter: &egui::Painter,
        frame: &MapFrame,
        context: &PresenterContext,
        snapshot: &NavigationContext,
        index: usize,
    ) {
        let Some(record) = context.deck.get(index) else {
            return;
        };

        let center = frame.to_screen(context.layout.node_position(index));
        let is_target = snapshot.pending_target == Some(index);
        let is_visited = self.visited.is_visited(index);
        let base_radius = frame.scale(self.config.node_radius);

        let node_rect = Rect::from_center_size(center, Vec2::splat(base_radius * 2.0));
        let response = ui.interact(
            node_rect,
            WidgetId::new("overview_node").index(index).id(),
            Sense::click(),
        );

        let radius = if is_target {
            base_radius * 1.25
        } else if response.hovered() {
            base_radius * 1.15
        } else {
            base_radius
        };

        let (fill, stroke, glyph_color) = if is_target {
            (
                theme::mix(theme::primary_color(), theme::secondary_color(), 0.5),
                Stroke::new(3.0, Color32::WHITE),
                Color32::WHITE,
            )
        } else if is_visited {
            (
                theme::success_color(),
                Stroke::new(2.0, theme::success_color().linear_multiply(0.6)),
                Color32::WHITE,
            )
        } else if response.hovered() {
            (
                theme::surface_color(),
                Stroke::new(2.0, theme::primary_color().linear_multiply(0.7)),
                theme::primary_color(),
            )
        } else {
            (
                theme::surface_color().linear_multiply(0.8),
                Stroke::new(2.0, Color32::from_white_alpha(77)),
                theme::primary_color(),
            )
        };

        painter.circle(center, radius, fill, stroke);

        let glyph = record.glyph.as_deref().unwrap_or(icons::BULLET);
        painter.text(
            center - Vec2::new(0.0, radius * 0.15),
            Align2::CENTER_CENTER,
            glyph,
            FontId::proportional(radius * 0.6),
            glyph_color,
        );
        painter.text(
            center + Vec2::new(0.0, radius * 0.5),
            Align2::CENTER_CENTER,
            format!("{}", index + 1),
            FontId::monospace((radius * 0.3).max(8.0)),
            glyph_color.linear_multiply(0.8),
        );

        if is_visited && !is_target {
            let badge = center + Vec2::new(radius * 0.72, -radius * 0.72);
            painter.circle_filled(badge, radius * 0.25, theme::success_color());
            painter.text(
                badge,
                Align2::CENTER_CENTER,
                icons::CHECK,
                FontId::proportional(radius * 0.3),
                Color32::WHITE,
            );
        }

        if response.clicked() {
            debug!("Overview node {} clicked", index + 1);
            // Rejections (e.g. disposed engine) leave the map unchanged
            let _ = context.navigation.select_slide(index);
        }

        let title = record.title.clone();
        response.on_hover_ui(|ui| {
            ui.label(egui::RichText::new(title).color(theme::text_main_color()).strong());
            ui.label(
                egui::RichText::new("Click to open")
                    .small()
                    .color(theme::text_muted_color()),
            );
        });
    }

    fn draw_footer(&self, painter: &egui::Painter, rect: Rect, slide_count: usize) {
        let text = format!(
            "{} {} / {} visited",
            icons::PIN,
            self.visited.count(),
            slide_count
        );
        painter.text(
            Pos2::new(rect.center().x, rect.bottom() - 20.0),
            Align2::CENTER_CENTER,
            text,
            FontId::monospace(14.0),
            theme::text_body_color(),
        );
    }
}

impl Default for OverviewMap {
    fn default() -> Self {
        Self::new(OverviewMapConfig::default())
    }
}
