//! Presenting chrome: progress bar, counter, dots and arrow buttons

use crate::icons;
use crate::theme;
use deck_core::{NavigationContext, PresenterContext};
use egui::{Align2, Color32, FontId, Pos2, Rect, RichText, Rounding, Sense, Stroke, Ui, Vec2};

/// Navigation panel configuration
#[derive(Debug, Clone)]
pub struct NavigationPanelConfig {
    /// Height of the top progress bar
    pub progress_height: f32,

    /// Diameter of each navigation dot
    pub dot_size: f32,

    /// Size of the previous/next buttons
    pub arrow_size: f32,

    /// Distance of the chrome from the window edges
    pub margin: f32,
}

impl Default for NavigationPanelConfig {
    fn default() -> Self {
        Self {
            progress_height: 4.0,
            dot_size: 12.0,
            arrow_size: 48.0,
            margin: 32.0,
        }
    }
}

/// Controls drawn over the presented slide
pub struct NavigationPanel {
    config: NavigationPanelConfig,
}

impl NavigationPanel {
    /// Create a new navigation panel
    pub fn new() -> Self {
        Self {
            config: NavigationPanelConfig::default(),
        }
    }

    /// Set configuration
    pub fn with_config(mut self, config: NavigationPanelConfig) -> Self {
        self.config = config;
        self
    }

    /// Draw the chrome inside `rect`
    pub fn ui(&mut self, ui: &mut Ui, rect: Rect, context: &PresenterContext) {
        let snapshot = context.snapshot();
        let Some(active) = snapshot.active_index else {
            return;
        };

        self.draw_progress(ui, rect, &snapshot);
        self.draw_counter(ui, rect, active, snapshot.slide_count);
        self.draw_dots(ui, rect, context, active);
        self.arrow_buttons(ui, rect, context, &snapshot);
        self.back_to_map_button(ui, rect, context);
    }

    fn draw_progress(&self, ui: &Ui, rect: Rect, snapshot: &NavigationContext) {
        let bar = Rect::from_min_size(rect.min, Vec2::new(rect.width(), self.config.progress_height));
        let painter = ui.painter();
        painter.rect_filled(bar, Rounding::ZERO, theme::surface_color());

        let filled = Rect::from_min_size(
            bar.min,
            Vec2::new(bar.width() * snapshot.progress(), bar.height()),
        );
        painter.rect_filled(
            filled,
            Rounding::ZERO,
            theme::mix(theme::primary_color(), theme::secondary_color(), snapshot.progress()),
        );
    }

    fn draw_counter(&self, ui: &Ui, rect: Rect, active: usize, slide_count: usize) {
        let text = format!("{} / {}", active + 1, slide_count);
        let galley = ui.painter().layout_no_wrap(
            text,
            FontId::monospace(15.0),
            theme::text_body_color(),
        );
        let size = galley.size() + Vec2::new(32.0, 16.0);
        let frame = Rect::from_min_size(
            Pos2::new(
                rect.right() - self.config.margin - size.x,
                rect.bottom() - self.config.margin - size.y,
            ),
            size,
        );

        let painter = ui.painter();
        painter.rect(
            frame,
            Rounding::same(8.0),
            theme::surface_color().linear_multiply(0.8),
            Stroke::new(1.0, Color32::from_white_alpha(25)),
        );
        painter.galley(frame.min + Vec2::new(16.0, 8.0), galley);
    }

    fn draw_dots(&self, ui: &mut Ui, rect: Rect, context: &PresenterContext, active: usize) {
        let count = context.deck.len();
        if count == 0 {
            return;
        }

        let spacing = self.config.dot_size * 0.7;
        let total = count as f32 * self.config.dot_size + (count - 1) as f32 * spacing;
        let y = rect.bottom() - self.config.margin - self.config.dot_size / 2.0;
        let mut x = rect.center().x - total / 2.0 + self.config.dot_size / 2.0;

        for (index, slide) in context.deck.iter().enumerate() {
            let center = Pos2::new(x, y);
            let dot = Rect::from_center_size(center, Vec2::splat(self.config.dot_size));
            let response = ui.interact(
                dot,
                ui.id().with(("deck_dot", index)),
                Sense::hover(),
            );

            let radius = if response.hovered() {
                self.config.dot_size * 0.6
            } else {
                self.config.dot_size / 2.0
            };
            let color = if index == active {
                theme::primary_color()
            } else {
                Color32::from_white_alpha(77)
            };
            ui.painter().circle_filled(center, radius, color);
            response.on_hover_text(&slide.title);

            x += self.config.dot_size + spacing;
        }
    }

    fn arrow_buttons(&self, ui: &mut Ui, rect: Rect, context: &PresenterContext, snapshot: &NavigationContext) {
        let size = Vec2::splat(self.config.arrow_size);
        let left = Rect::from_center_size(
            Pos2::new(rect.left() + self.config.margin + size.x / 2.0, rect.center().y),
            size,
        );
        let right = Rect::from_center_size(
            Pos2::new(rect.right() - self.config.margin - size.x / 2.0, rect.center().y),
            size,
        );

        if arrow_button(ui, left, icons::PREVIOUS, !snapshot.is_first(), "Previous slide (←)") {
            let _ = context.navigation.previous();
        }
        if arrow_button(ui, right, icons::NEXT, !snapshot.is_last(), "Next slide (→ / Space)") {
            let _ = context.navigation.next();
        }
    }

    fn back_to_map_button(&self, ui: &mut Ui, rect: Rect, context: &PresenterContext) {
        let button = Rect::from_min_size(
            Pos2::new(rect.left() + self.config.margin, rect.bottom() - self.config.margin - 36.0),
            Vec2::new(150.0, 36.0),
        );
        let clicked = ui
            .allocate_ui_at_rect(button, |ui| {
                ui.add(egui::Button::new(
                    RichText::new(format!("{} Back to map", icons::MAP))
                        .color(theme::text_body_color()),
                ))
                .on_hover_text("Return to the overview (Esc)")
                .clicked()
            })
            .inner;
        if clicked {
            let _ = context.navigation.to_overview();
        }
    }
}

impl Default for NavigationPanel {
    fn default() -> Self {
        Self::new()
    }
}

/// Round arrow button; disabled buttons are dimmed and ignore clicks
fn arrow_button(ui: &mut Ui, rect: Rect, glyph: &str, enabled: bool, hint: &str) -> bool {
    let id = ui.id().with(("deck_arrow", glyph));
    let sense = if enabled { Sense::click() } else { Sense::hover() };
    let response = ui.interact(rect, id, sense);

    let alpha = if enabled { 1.0 } else { 0.5 };
    let fill = if enabled && response.hovered() {
        Color32::from_white_alpha(26)
    } else {
        theme::surface_color().linear_multiply(0.6)
    };
    let painter = ui.painter();
    painter.circle(
        rect.center(),
        rect.width() / 2.0,
        fill,
        Stroke::new(1.0, Color32::from_white_alpha(25)),
    );
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        glyph,
        FontId::proportional(rect.width() * 0.45),
        theme::text_body_color().gamma_multiply(alpha),
    );

    let clicked = enabled && response.clicked();
    response.on_hover_text(hint);
    clicked
}
