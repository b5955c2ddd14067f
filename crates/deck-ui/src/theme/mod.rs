use egui::{Color32, Context, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};
use std::collections::BTreeMap;

/// Theme configuration
pub struct Theme {
    pub name: String,
    /// Multiplier applied to every text size
    pub text_scale: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "Deck Night".to_string(),
            text_scale: 1.0,
        }
    }
}

/// Apply the presenter theme (deep navy with sky and violet accents)
pub fn apply_theme(ctx: &Context, theme: &Theme) {
    let mut style = Style::default();
    let mut visuals = Visuals::dark();

    let widget_bg = surface_color();
    let hover_color = Color32::from_rgb(30, 41, 59);
    let active_color = Color32::from_rgb(51, 65, 85);
    let accent_color = primary_color();
    let text_color = text_body_color();

    // Window and panel styling
    visuals.window_fill = surface_color();
    visuals.panel_fill = background_color();
    visuals.extreme_bg_color = panel_color();
    visuals.faint_bg_color = widget_bg;

    // Widget styling
    visuals.widgets.noninteractive.bg_fill = widget_bg;
    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, Color32::from_white_alpha(30));
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, text_color);
    visuals.widgets.noninteractive.rounding = Rounding::same(8.0);

    visuals.widgets.inactive.bg_fill = widget_bg;
    visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, Color32::from_white_alpha(40));
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, text_color);
    visuals.widgets.inactive.rounding = Rounding::same(8.0);

    visuals.widgets.hovered.bg_fill = hover_color;
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, accent_color.linear_multiply(0.7));
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, text_main_color());
    visuals.widgets.hovered.rounding = Rounding::same(8.0);

    visuals.widgets.active.bg_fill = active_color;
    visuals.widgets.active.bg_stroke = Stroke::new(1.0, accent_color);
    visuals.widgets.active.fg_stroke = Stroke::new(1.0, text_main_color());
    visuals.widgets.active.rounding = Rounding::same(8.0);

    // Selection and highlighting
    visuals.selection.bg_fill = accent_color.linear_multiply(0.3);
    visuals.selection.stroke = Stroke::new(1.0, accent_color);

    visuals.hyperlink_color = accent_color;
    visuals.code_bg_color = Color32::BLACK;

    // Shadows
    visuals.window_shadow.extrusion = 12.0;
    visuals.popup_shadow.extrusion = 6.0;

    // Apply spacing
    style.spacing.item_spacing = egui::vec2(10.0, 8.0);
    style.spacing.button_padding = egui::vec2(10.0, 6.0);
    style.spacing.menu_margin = egui::Margin::same(8.0);

    // Font sizes
    let size = |points: f32| points * theme.text_scale;
    let mut font_sizes = BTreeMap::new();
    font_sizes.insert(TextStyle::Small, FontId::new(size(12.0), FontFamily::Proportional));
    font_sizes.insert(TextStyle::Body, FontId::new(size(16.0), FontFamily::Proportional));
    font_sizes.insert(TextStyle::Button, FontId::new(size(15.0), FontFamily::Proportional));
    font_sizes.insert(TextStyle::Heading, FontId::new(size(32.0), FontFamily::Proportional));
    font_sizes.insert(TextStyle::Monospace, FontId::new(size(15.0), FontFamily::Monospace));

    style.text_styles = font_sizes;

    ctx.set_style(style);
    ctx.set_visuals(visuals);
}

/// Window background
pub fn background_color() -> Color32 {
    Color32::from_rgb(11, 18, 32)
}

/// Cards and nodes
pub fn surface_color() -> Color32 {
    Color32::from_rgb(17, 24, 39)
}

/// Darkest fill: tooltips, terminal chrome
pub fn panel_color() -> Color32 {
    Color32::from_rgb(2, 6, 23)
}

/// Get the primary accent color
pub fn primary_color() -> Color32 {
    Color32::from_rgb(56, 189, 248)
}

pub fn primary_hover_color() -> Color32 {
    Color32::from_rgb(14, 165, 233)
}

/// Get the secondary accent color
pub fn secondary_color() -> Color32 {
    Color32::from_rgb(167, 139, 250)
}

/// Titles
pub fn text_main_color() -> Color32 {
    Color32::from_rgb(248, 250, 252)
}

/// Body copy
pub fn text_body_color() -> Color32 {
    Color32::from_rgb(203, 213, 225)
}

/// Hints and captions
pub fn text_muted_color() -> Color32 {
    Color32::from_rgb(148, 163, 184)
}

/// Get the error color for the theme
pub fn error_color() -> Color32 {
    Color32::from_rgb(239, 68, 68)
}

/// Get the warning color for the theme
pub fn warning_color() -> Color32 {
    Color32::from_rgb(245, 158, 11)
}

/// Get the success color for the theme
pub fn success_color() -> Color32 {
    Color32::from_rgb(34, 197, 94)
}

/// Linear blend between two colours, `t` in `[0, 1]`
pub fn mix(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let channel = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    Color32::from_rgba_unmultiplied(
        channel(a.r(), b.r()),
        channel(a.g(), b.g()),
        channel(a.b(), b.b()),
        channel(a.a(), b.a()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mix_endpoints() {
        assert_eq!(mix(primary_color(), secondary_color(), 0.0), primary_color());
        assert_eq!(mix(primary_color(), secondary_color(), 1.0), secondary_color());
    }

    #[test]
    fn test_mix_midpoint() {
        let mid = mix(Color32::from_rgb(0, 0, 0), Color32::from_rgb(200, 100, 50), 0.5);
        assert_eq!(mid, Color32::from_rgb(100, 50, 25));
    }
}
