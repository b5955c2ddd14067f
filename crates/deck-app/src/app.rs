//! The presenter application

use std::sync::Arc;
use std::time::Duration;

use eframe::egui::{self, Context};
use tracing::{error, info};

use deck_core::{Deck, InputRouter, Point, PresenterContext, RadialLayout};
use deck_data::{builtin_deck, load_deck, PresenterConfig};
use deck_ui::{
    menu_bar, show_error_messages, theme, NavigationPanel, OverviewMap, OverviewMapConfig,
    ShellAction, SlideFade, SlideView, Theme, UiState,
};

/// Longest step the simulated clock takes in one frame
const MAX_FRAME_STEP: f32 = 0.1;

/// Main application state
pub struct DeckApp {
    /// Deck, engine and layout for the open deck
    context: PresenterContext,

    /// Keyboard routing into the engine
    router: InputRouter,

    /// Radial overview
    overview: OverviewMap,

    /// Presenting chrome
    panel: NavigationPanel,

    /// Slide fade-in state
    fade: SlideFade,

    /// Error banners
    ui_state: UiState,

    config: PresenterConfig,
}

impl DeckApp {
    pub fn new(cc: &eframe::CreationContext<'_>, deck: Deck, config: PresenterConfig) -> Self {
        deck_ui::apply_theme(&cc.egui_ctx, &Theme::default());
        Self::with_deck(deck, config)
    }

    /// Build the app around `deck` without a window
    pub fn with_deck(deck: Deck, config: PresenterConfig) -> Self {
        let context = build_context(deck, &config);
        let start = config.start_index(context.deck.len());

        let mut app = Self {
            overview: OverviewMap::new(overview_config(&config)),
            context,
            router: InputRouter::new(),
            panel: NavigationPanel::new(),
            fade: SlideFade::default(),
            ui_state: UiState::default(),
            config,
        };
        app.wire();

        // A configured start slide still enters through the zoom
        if let Some(index) = start {
            let _ = app.context.navigation.select_slide(index);
        }

        app
    }

    pub fn context(&self) -> &PresenterContext {
        &self.context
    }

    pub fn router(&self) -> &InputRouter {
        &self.router
    }

    /// Replace the open deck; the old engine is disposed first
    pub fn open_deck(&mut self, deck: Deck) {
        info!("Opening deck '{}' ({} slides)", deck.title, deck.len());

        self.router.detach();
        self.context.dispose();

        self.context = build_context(deck, &self.config);
        self.overview = OverviewMap::new(overview_config(&self.config));
        self.fade.reset();
        self.wire();
    }

    /// Hook the overview and the router up to the current engine
    fn wire(&mut self) {
        self.context.navigation.add_subscriber(self.overview.visited());
        self.router.attach(&self.context.navigation);
    }

    fn handle_action(&mut self, ctx: &Context, action: ShellAction) {
        let result = match action {
            ShellAction::OpenDeck => {
                let Some(path) = rfd::FileDialog::new()
                    .add_filter("Deck", &["json"])
                    .pick_file()
                else {
                    return;
                };
                load_deck(&path)
            }
            ShellAction::ReloadBuiltin => builtin_deck(),
        };

        match result {
            Ok(deck) => {
                ctx.send_viewport_cmd(egui::ViewportCommand::Title(window_title(&deck)));
                self.open_deck(deck);
            }
            Err(e) => {
                error!("Failed to open deck: {}", e);
                self.ui_state.push_error("Failed to open deck", e.to_string());
            }
        }
    }
}

impl eframe::App for DeckApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let dt = ctx.input(|i| i.stable_dt).clamp(0.0, MAX_FRAME_STEP);
        self.context.navigation.advance(Duration::from_secs_f32(dt));

        self.router.handle_input(ctx);

        if let Some(action) = menu_bar(ctx, Some(&self.context)) {
            self.handle_action(ctx, action);
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(theme::background_color()))
            .show(ctx, |ui| {
                show_error_messages(ui, &mut self.ui_state);

                if self.context.snapshot().is_presenting() {
                    let rect = ui.max_rect();
                    SlideView::show(ui, &mut self.fade, &self.context);
                    self.panel.ui(ui, rect, &self.context);
                } else {
                    self.overview.ui(ui, &self.context);
                }
            });

        // Keep the clock running until the jump lands
        if self.context.snapshot().is_transitioning() {
            ctx.request_repaint();
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.router.detach();
        self.context.dispose();
    }
}

/// Presenter context sized from the configuration
pub fn build_context(deck: Deck, config: &PresenterConfig) -> PresenterContext {
    let layout = RadialLayout::new(
        deck.len(),
        config.layout.radius,
        Point::new(config.layout.center_x, config.layout.center_y),
    )
    .with_zoom_factor(config.layout.zoom_factor);

    PresenterContext::with_layout(Arc::new(deck), layout, config.transition_delay())
}

fn overview_config(config: &PresenterConfig) -> OverviewMapConfig {
    OverviewMapConfig {
        node_radius: config.layout.node_radius,
        ..Default::default()
    }
}

pub fn window_title(deck: &Deck) -> String {
    if deck.title.is_empty() {
        "Deck".to_string()
    } else {
        format!("{} · Deck", deck.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_core::slide::{SlideBody, SlideRecord};
    use deck_core::Intent;
    use deck_data::config::StartAt;

    fn deck(title: &str, count: u32) -> Deck {
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
        Deck::new(title, slides)
    }

    #[test]
    fn test_starts_in_overview_by_default() {
        let app = DeckApp::with_deck(deck("A", 5), PresenterConfig::default());
        assert!(app.context().snapshot().is_overview());
        assert!(app.router().is_attached());
    }

    #[test]
    fn test_start_slide_enters_through_transition() {
        let config = PresenterConfig {
            start: StartAt::Slide(3),
            ..Default::default()
        };
        let app = DeckApp::with_deck(deck("A", 5), config);
        let snapshot = app.context().snapshot();
        assert!(snapshot.is_transitioning());
        assert_eq!(snapshot.pending_target, Some(2));

        app.context().navigation.advance(Duration::from_secs(1));
        assert_eq!(app.context().snapshot().active_index, Some(2));
    }

    #[test]
    fn test_config_shapes_layout_and_timing() {
        let mut config = PresenterConfig::default();
        config.layout.radius = 200.0;
        config.timing.transition_delay_ms = 100;

        let context = build_context(deck("A", 4), &config);
        assert_eq!(context.layout.radius(), 200.0);
        assert_eq!(context.layout.count(), 4);
        assert_eq!(context.navigation.transition_delay(), Duration::from_millis(100));
    }

    #[test]
    fn test_open_deck_disposes_old_engine_and_rewires() {
        let mut app = DeckApp::with_deck(deck("A", 5), PresenterConfig::default());
        let old = app.context().navigation.clone();
        old.select_slide(1).unwrap();

        app.open_deck(deck("B", 3));

        assert!(old.is_disposed());
        assert_eq!(old.pending_completions(), 0);

        let context = app.context();
        assert_eq!(context.deck.title, "B");
        assert_eq!(context.navigation.slide_count(), 3);
        assert!(context.snapshot().is_overview());

        // router follows the new engine
        context.navigation.select_slide(0).unwrap();
        context.navigation.advance(Duration::from_secs(1));
        assert!(app.router().dispatch(Intent::Next));
        assert_eq!(app.context().snapshot().active_index, Some(1));
    }

    #[test]
    fn test_window_title() {
        assert_eq!(window_title(&deck("Talk", 1)), "Talk · Deck");
        assert_eq!(window_title(&deck("", 1)), "Deck");
    }
}
