//! Slide content renderer
//!
//! One layout template per [`SlideBody`] variant. The view only draws the
//! record the navigation context marks active.

use crate::icons;
use crate::theme;
use crate::widget_utils::{GridExt, ScrollAreaExt, WidgetId};
use deck_core::slide::{
    ComparisonCard, Concept, ContentBody, DiagramBody, IconText, Spec, StackLayer,
    TerminalCommand,
};
use deck_core::{Direction, PresenterContext, SlideBody, SlideId, SlideRecord, SlideRenderer};
use egui::{Color32, Grid, RichText, ScrollArea, Stroke, Ui, Vec2};

/// Horizontal distance a slide travels while fading in
const SLIDE_IN_DISTANCE: f32 = 60.0;

/// Fade-in state, kept across frames
#[derive(Debug, Clone)]
pub struct SlideFade {
    /// Slide being faded in and when it appeared (egui time, seconds)
    current: Option<(SlideId, f64)>,
    /// Fade duration in seconds
    duration: f64,
}

impl Default for SlideFade {
    fn default() -> Self {
        Self {
            current: None,
            duration: 0.35,
        }
    }
}

impl SlideFade {
    /// Fade progress in `[0, 1]` for `slide` at time `now`; a new slide restarts at 0
    pub fn progress(&mut self, slide: SlideId, now: f64) -> f32 {
        match self.current {
            Some((id, started)) if id == slide => {
                if self.duration <= 0.0 {
                    return 1.0;
                }
                ((now - started) / self.duration).clamp(0.0, 1.0) as f32
            }
            _ => {
                self.current = Some((slide, now));
                0.0
            }
        }
    }

    pub fn reset(&mut self) {
        self.current = None;
    }
}

/// Horizontal entry offset for a slide at fade progress `t`
pub fn entry_offset(direction: Direction, t: f32) -> f32 {
    let remaining = 1.0 - t.clamp(0.0, 1.0);
    match direction {
        Direction::Forward => SLIDE_IN_DISTANCE * remaining,
        Direction::Backward => -SLIDE_IN_DISTANCE * remaining,
        Direction::Jump => 0.0,
    }
}

/// Alpha applied to every colour of the slide being drawn
#[derive(Clone, Copy)]
struct Tint(f32);

impl Tint {
    fn apply(self, color: Color32) -> Color32 {
        color.gamma_multiply(self.0)
    }
}

/// Renders the active slide into a `Ui`
pub struct SlideView<'a> {
    ui: &'a mut Ui,
    fade: &'a mut SlideFade,
}

impl<'a> SlideView<'a> {
    pub fn new(ui: &'a mut Ui, fade: &'a mut SlideFade) -> Self {
        Self { ui, fade }
    }

    /// Draw whichever slide is active in `context`
    pub fn show(ui: &mut Ui, fade: &mut SlideFade, context: &PresenterContext) {
        let snapshot = context.snapshot();
        let mut view = SlideView::new(ui, fade);
        snapshot.render_with(&context.deck, &mut view);
    }

    fn draw(&mut self, record: &SlideRecord, direction: Direction) {
        let now = self.ui.input(|i| i.time);
        let t = self.fade.progress(record.id, now);
        if t < 1.0 {
            self.ui.ctx().request_repaint();
        }

        let tint = Tint(t);
        let rect = self
            .ui
            .max_rect()
            .translate(Vec2::new(entry_offset(direction, t), 0.0));

        self.ui.allocate_ui_at_rect(rect, |ui| {
            ScrollArea::vertical()
                .id_builder(WidgetId::new("slide_scroll").with(record.id))
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    ui.add_space(48.0);
                    ui.vertical_centered(|ui| {
                        ui.set_max_width(960.0);
                        slide_body(ui, record, tint);
                    });
                    ui.add_space(96.0);
                });
        });
    }
}

impl SlideRenderer for SlideView<'_> {
    fn render_slide(&mut self, record: &SlideRecord, is_active: bool, direction: Direction) {
        if is_active {
            self.draw(record, direction);
        }
    }
}

fn slide_body(ui: &mut Ui, record: &SlideRecord, tint: Tint) {
    match &record.body {
        SlideBody::Cover => cover(ui, record, tint),
        SlideBody::Toc { items } => {
            title(ui, record, tint);
            toc(ui, record.id, items, tint);
        }
        SlideBody::Content { body } => {
            title(ui, record, tint);
            content(ui, body, tint);
        }
        SlideBody::Diagram { body } => {
            title(ui, record, tint);
            match body {
                DiagramBody::Cards(cards) => comparison_cards(ui, cards, tint),
                DiagramBody::Layers(layers) => layer_stack(ui, layers, tint),
            }
        }
        SlideBody::Table { headers, rows } => {
            title(ui, record, tint);
            table(ui, record.id, headers, rows, tint);
        }
        SlideBody::Terminal { prompt, commands } => {
            title(ui, record, tint);
            terminal(ui, prompt, commands, tint);
        }
        SlideBody::Conclusion { summary, closing } => {
            conclusion(ui, record, summary, closing.as_deref(), tint)
        }
        SlideBody::ThankYou => thank_you(ui, record, tint),
    }
}

fn title(ui: &mut Ui, record: &SlideRecord, tint: Tint) {
    ui.label(
        RichText::new(&record.title)
            .size(40.0)
            .strong()
            .color(tint.apply(theme::text_main_color())),
    );
    if let Some(subtitle) = &record.subtitle {
        ui.label(
            RichText::new(subtitle)
                .size(20.0)
                .color(tint.apply(theme::primary_color())),
        );
    }
    accent_rule(ui, tint);
    ui.add_space(24.0);
}

/// Short gradient-coloured rule under titles
fn accent_rule(ui: &mut Ui, tint: Tint) {
    let (rect, _) = ui.allocate_exact_size(Vec2::new(96.0, 4.0), egui::Sense::hover());
    let half = rect.width() / 2.0;
    let painter = ui.painter();
    painter.rect_filled(
        egui::Rect::from_min_size(rect.min, Vec2::new(half, rect.height())),
        0.0,
        tint.apply(theme::primary_color()),
    );
    painter.rect_filled(
        egui::Rect::from_min_size(rect.min + Vec2::new(half, 0.0), Vec2::new(half, rect.height())),
        0.0,
        tint.apply(theme::secondary_color()),
    );
}

fn card(ui: &mut Ui, tint: Tint, border: Color32, add_contents: impl FnOnce(&mut Ui)) {
    egui::Frame::none()
        .fill(tint.apply(theme::surface_color()))
        .stroke(Stroke::new(1.0, tint.apply(border)))
        .rounding(10.0)
        .inner_margin(16.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui);
        });
}

fn cover(ui: &mut Ui, record: &SlideRecord, tint: Tint) {
    ui.add_space(80.0);
    ui.label(
        RichText::new(&record.title)
            .size(56.0)
            .strong()
            .color(tint.apply(theme::text_main_color())),
    );
    if let Some(subtitle) = &record.subtitle {
        ui.add_space(12.0);
        ui.label(
            RichText::new(subtitle)
                .size(26.0)
                .color(tint.apply(theme::primary_color())),
        );
    }
    ui.add_space(16.0);
    accent_rule(ui, tint);
    ui.add_space(40.0);
    authors(ui, &record.authors, tint);
}

fn authors(ui: &mut Ui, authors: &[String], tint: Tint) {
    for author in authors {
        ui.label(
            RichText::new(author)
                .size(18.0)
                .color(tint.apply(theme::text_body_color())),
        );
    }
}

fn toc(ui: &mut Ui, slide: SlideId, items: &[String], tint: Tint) {
    let half = (items.len() + 1) / 2;
    Grid::new_with_id(WidgetId::new("toc").with(slide))
        .num_columns(2)
        .spacing([48.0, 14.0])
        .show(ui, |ui| {
            for row in 0..half {
                for column in 0..2 {
                    let index = column * half + row;
                    match items.get(index) {
                        Some(item) => {
                            ui.horizontal(|ui| {
                                ui.label(
                                    RichText::new(format!("{:02}", index + 1))
                                        .monospace()
                                        .color(tint.apply(theme::primary_color())),
                                );
                                ui.label(
                                    RichText::new(item)
                                        .size(20.0)
                                        .color(tint.apply(theme::text_body_color())),
                                );
                            });
                        }
                        None => {
                            ui.label("");
                        }
                    }
                }
                ui.end_row();
            }
        });
}

fn content(ui: &mut Ui, body: &ContentBody, tint: Tint) {
    match body {
        ContentBody::Points(points) => {
            for point in points {
                bullet_row(ui, icons::POINT, theme::primary_color(), point, tint);
            }
        }
        ContentBody::Requirements(requirements) => {
            for requirement in requirements {
                bullet_row(ui, icons::CHECK, theme::success_color(), requirement, tint);
            }
        }
        ContentBody::Steps(steps) => {
            for (index, step) in steps.iter().enumerate() {
                step_row(ui, index + 1, step, tint);
            }
        }
        ContentBody::Objectives(items)
        | ContentBody::Features(items)
        | ContentBody::Advantages(items) => icon_cards(ui, items, theme::primary_color(), tint),
        ContentBody::Limitations(items) => icon_cards(ui, items, theme::warning_color(), tint),
        ContentBody::Concepts(concepts) => concept_cards(ui, concepts, tint),
        ContentBody::Specs(specs) => spec_cards(ui, specs, tint),
    }
}

fn bullet_row(ui: &mut Ui, marker: &str, marker_color: Color32, text: &str, tint: Tint) {
    ui.horizontal_wrapped(|ui| {
        ui.label(RichText::new(marker).size(20.0).color(tint.apply(marker_color)));
        ui.label(
            RichText::new(text)
                .size(20.0)
                .color(tint.apply(theme::text_body_color())),
        );
    });
    ui.add_space(6.0);
}

fn step_row(ui: &mut Ui, number: usize, text: &str, tint: Tint) {
    ui.horizontal(|ui| {
        let (rect, _) = ui.allocate_exact_size(Vec2::splat(32.0), egui::Sense::hover());
        ui.painter()
            .circle_filled(rect.center(), 16.0, tint.apply(theme::primary_color()));
        ui.painter().text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            number.to_string(),
            egui::FontId::proportional(16.0),
            tint.apply(theme::panel_color()),
        );
        ui.label(
            RichText::new(text)
                .size(20.0)
                .color(tint.apply(theme::text_body_color())),
        );
    });
    ui.add_space(6.0);
}

fn icon_cards(ui: &mut Ui, items: &[IconText], accent: Color32, tint: Tint) {
    for item in items {
        let glyph = item.icon.as_deref().map(icons::glyph).unwrap_or(icons::BULLET);
        card(ui, tint, accent.linear_multiply(0.4), |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(glyph).size(24.0).color(tint.apply(accent)));
                ui.label(
                    RichText::new(&item.text)
                        .size(18.0)
                        .color(tint.apply(theme::text_body_color())),
                );
            });
        });
        ui.add_space(4.0);
    }
}

fn concept_cards(ui: &mut Ui, concepts: &[Concept], tint: Tint) {
    for concept in concepts {
        card(ui, tint, theme::secondary_color().linear_multiply(0.4), |ui| {
            ui.label(
                RichText::new(&concept.term)
                    .size(20.0)
                    .strong()
                    .color(tint.apply(theme::primary_color())),
            );
            ui.label(
                RichText::new(&concept.desc)
                    .size(16.0)
                    .color(tint.apply(theme::text_body_color())),
            );
        });
        ui.add_space(4.0);
    }
}

fn spec_cards(ui: &mut Ui, specs: &[Spec], tint: Tint) {
    ui.horizontal_wrapped(|ui| {
        for spec in specs {
            egui::Frame::none()
                .fill(tint.apply(theme::surface_color()))
                .stroke(Stroke::new(1.0, tint.apply(theme::primary_color().linear_multiply(0.4))))
                .rounding(10.0)
                .inner_margin(20.0)
                .show(ui, |ui| {
                    ui.set_min_width(180.0);
                    ui.vertical_centered(|ui| {
                        let glyph = spec.icon.as_deref().map(icons::glyph).unwrap_or(icons::BULLET);
                        ui.label(
                            RichText::new(glyph)
                                .size(30.0)
                                .color(tint.apply(theme::primary_color())),
                        );
                        ui.label(
                            RichText::new(&spec.label)
                                .color(tint.apply(theme::text_muted_color())),
                        );
                        ui.label(
                            RichText::new(&spec.value)
                                .size(24.0)
                                .strong()
                                .color(tint.apply(theme::text_main_color())),
                        );
                    });
                });
        }
    });
}

fn comparison_cards(ui: &mut Ui, cards: &[ComparisonCard], tint: Tint) {
    let columns = cards.len().max(1);
    ui.columns(columns, |columns| {
        for (column, item) in columns.iter_mut().zip(cards) {
            let border = if item.highlight {
                theme::primary_color()
            } else {
                Color32::from_white_alpha(60)
            };
            card(column, tint, border, |ui| {
                ui.label(
                    RichText::new(&item.name)
                        .size(24.0)
                        .strong()
                        .color(tint.apply(theme::text_main_color())),
                );
                ui.label(
                    RichText::new(&item.desc)
                        .size(16.0)
                        .color(tint.apply(theme::text_body_color())),
                );
                ui.add_space(8.0);
                for example in &item.examples {
                    ui.label(
                        RichText::new(format!("{} {}", icons::BULLET, example))
                            .color(tint.apply(theme::text_muted_color())),
                    );
                }
                if item.highlight {
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new("★ Used in this deck")
                            .small()
                            .color(tint.apply(theme::primary_color())),
                    );
                }
            });
        }
    });
}

fn layer_stack(ui: &mut Ui, layers: &[StackLayer], tint: Tint) {
    let count = layers.len().max(1) as f32;
    for (index, layer) in layers.iter().enumerate() {
        if index > 0 {
            ui.label(
                RichText::new(icons::ARROW_DOWN)
                    .size(22.0)
                    .color(tint.apply(theme::primary_color())),
            );
        }

        // Lower layers are wider, like the hardware under the host
        let width = 320.0 + 320.0 * (index as f32 / count);
        let fill = theme::mix(theme::primary_color(), theme::surface_color(), index as f32 / count);
        egui::Frame::none()
            .fill(tint.apply(fill.linear_multiply(0.6)))
            .stroke(Stroke::new(2.0, tint.apply(fill)))
            .rounding(8.0)
            .inner_margin(14.0)
            .show(ui, |ui| {
                ui.set_width(width);
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new(&layer.label)
                            .size(20.0)
                            .strong()
                            .color(tint.apply(Color32::WHITE)),
                    );
                    if let Some(detail) = &layer.detail {
                        ui.label(
                            RichText::new(detail).color(tint.apply(theme::text_body_color())),
                        );
                    }
                });
            });
    }
}

fn table(ui: &mut Ui, slide: SlideId, headers: &[String], rows: &[Vec<String>], tint: Tint) {
    Grid::new_with_id(WidgetId::new("table").with(slide))
        .num_columns(headers.len())
        .striped(true)
        .spacing([32.0, 10.0])
        .show(ui, |ui| {
            for header in headers {
                ui.label(
                    RichText::new(header)
                        .strong()
                        .color(tint.apply(theme::primary_color())),
                );
            }
            ui.end_row();

            for row in rows {
                for cell in row {
                    ui.label(RichText::new(cell).color(tint.apply(theme::text_body_color())));
                }
                ui.end_row();
            }
        });
}

fn terminal(ui: &mut Ui, prompt: &str, commands: &[TerminalCommand], tint: Tint) {
    egui::Frame::none()
        .fill(tint.apply(Color32::BLACK))
        .stroke(Stroke::new(1.0, tint.apply(Color32::from_gray(80))))
        .rounding(8.0)
        .inner_margin(20.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            ui.horizontal(|ui| {
                for color in [
                    Color32::from_rgb(239, 68, 68),
                    Color32::from_rgb(234, 179, 8),
                    theme::success_color(),
                ] {
                    let (rect, _) = ui.allocate_exact_size(Vec2::splat(12.0), egui::Sense::hover());
                    ui.painter().circle_filled(rect.center(), 6.0, tint.apply(color));
                }
                ui.label(
                    RichText::new(prompt.trim_end_matches('$'))
                        .monospace()
                        .color(tint.apply(theme::text_muted_color())),
                );
            });
            ui.separator();

            for command in commands {
                ui.horizontal_wrapped(|ui| {
                    ui.label(
                        RichText::new(prompt)
                            .monospace()
                            .strong()
                            .color(tint.apply(theme::success_color())),
                    );
                    ui.label(
                        RichText::new(&command.cmd)
                            .monospace()
                            .color(tint.apply(Color32::WHITE)),
                    );
                });
                if let Some(output) = &command.output {
                    ui.label(
                        RichText::new(output)
                            .monospace()
                            .color(tint.apply(theme::text_body_color())),
                    );
                }
                ui.label(
                    RichText::new(format!("# {}", command.desc))
                        .monospace()
                        .small()
                        .color(tint.apply(theme::text_muted_color())),
                );
                ui.add_space(8.0);
            }

            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(prompt)
                        .monospace()
                        .strong()
                        .color(tint.apply(theme::success_color())),
                );
                ui.label(RichText::new("█").monospace().color(tint.apply(Color32::WHITE)));
            });
        });
}

fn conclusion(ui: &mut Ui, record: &SlideRecord, summary: &[String], closing: Option<&str>, tint: Tint) {
    ui.add_space(40.0);
    title(ui, record, tint);
    for item in summary {
        bullet_row(ui, icons::CHECK, theme::success_color(), item, tint);
    }
    if let Some(closing) = closing {
        ui.add_space(24.0);
        ui.label(
            RichText::new(closing)
                .size(22.0)
                .strong()
                .color(tint.apply(theme::primary_color())),
        );
    }
}

fn thank_you(ui: &mut Ui, record: &SlideRecord, tint: Tint) {
    ui.add_space(120.0);
    ui.label(
        RichText::new(&record.title)
            .size(60.0)
            .strong()
            .color(tint.apply(theme::text_main_color())),
    );
    ui.add_space(16.0);
    accent_rule(ui, tint);
    ui.add_space(32.0);
    authors(ui, &record.authors, tint);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_fade_restarts_for_new_slide() {
        let mut fade = SlideFade::default();
        assert_eq!(fade.progress(1, 10.0), 0.0);
        assert!((fade.progress(1, 10.175) - 0.5).abs() < 1e-3);
        assert_eq!(fade.progress(1, 20.0), 1.0);

        assert_eq!(fade.progress(2, 20.0), 0.0);
        fade.reset();
        assert_eq!(fade.progress(2, 30.0), 0.0);
    }

    #[test]
    fn test_entry_offset_follows_direction() {
        assert_eq!(entry_offset(Direction::Forward, 0.0), SLIDE_IN_DISTANCE);
        assert_eq!(entry_offset(Direction::Backward, 0.0), -SLIDE_IN_DISTANCE);
        assert_eq!(entry_offset(Direction::Jump, 0.0), 0.0);
        assert_eq!(entry_offset(Direction::Forward, 1.0), 0.0);
    }

    #[test]
    fn test_every_variant_renders() {
        let slides = vec![
            SlideRecord {
                id: 1,
                title: "Cover".into(),
                subtitle: Some("Sub".into()),
                glyph: None,
                authors: vec!["A".into()],
                body: SlideBody::Cover,
            },
            SlideRecord {
                id: 2,
                title: "Table".into(),
                subtitle: None,
                glyph: None,
                authors: Vec::new(),
                body: SlideBody::Table {
                    headers: vec!["k".into(), "v".into()],
                    rows: vec![vec!["a".into(), "1".into()]],
                },
            },
            SlideRecord {
                id: 3,
                title: "Layers".into(),
                subtitle: None,
                glyph: None,
                authors: Vec::new(),
                body: SlideBody::Diagram {
                    body: DiagramBody::Layers(vec![StackLayer {
                        label: "Top".into(),
                        detail: None,
                    }]),
                },
            },
        ];
        let context = PresenterContext::new(Arc::new(deck_core::Deck::new("Test", slides)));
        let mut fade = SlideFade::default();

        let ctx = egui::Context::default();
        for index in 0..3 {
            context.navigation.select_slide(index).unwrap();
            context.navigation.advance(std::time::Duration::from_secs(1));
            let _ = ctx.run(egui::RawInput::default(), |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    SlideView::show(ui, &mut fade, &context);
                });
            });
            assert_eq!(context.snapshot().active_index, Some(index));
        }
    }
}
