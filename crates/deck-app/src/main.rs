//! Main application entry point

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Parser;
use eframe::egui;
use tracing::info;
use tracing_subscriber::EnvFilter;

use deck_data::config::StartAt;
use deck_data::{builtin_deck, load_deck, PresenterConfig};

mod app;

use app::{window_title, DeckApp};

/// Radial slide deck presenter
#[derive(Parser, Debug)]
#[command(name = "deck", version, about)]
struct Cli {
    /// Deck file (JSON); the built-in deck when omitted
    deck: Option<PathBuf>,

    /// Presenter configuration file (JSON)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Start on slide N (1-based)
    #[arg(long, value_name = "N", conflicts_with = "overview")]
    slide: Option<usize>,

    /// Start on the overview map
    #[arg(long)]
    overview: bool,

    /// Run in a window
    #[arg(long, conflicts_with = "fullscreen")]
    windowed: bool,

    /// Run fullscreen
    #[arg(long)]
    fullscreen: bool,
}

impl Cli {
    /// Command-line flags win over the configuration file
    fn apply_overrides(&self, config: &mut PresenterConfig) {
        if let Some(slide) = self.slide {
            config.start = StartAt::Slide(slide);
        }
        if self.overview {
            config.start = StartAt::Overview;
        }
        if self.windowed {
            config.window.fullscreen = false;
        }
        if self.fullscreen {
            config.window.fullscreen = true;
        }
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let mut config = PresenterConfig::load_or_default(cli.config.as_deref());
    cli.apply_overrides(&mut config);
    config.validate().context("Invalid presenter configuration")?;

    let deck = match &cli.deck {
        Some(path) => {
            load_deck(path).with_context(|| format!("Failed to load deck {}", path.display()))?
        }
        None => builtin_deck().context("Built-in deck is invalid")?,
    };

    let title = window_title(&deck);
    info!("Starting presenter: '{}' ({} slides)", deck.title, deck.len());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([800.0, 600.0])
            .with_fullscreen(config.window.fullscreen)
            .with_title(&title),
        default_theme: eframe::Theme::Dark,
        persist_window: false,
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Box::new(DeckApp::new(cc, deck, config))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run app: {}", e))?;

    Ok(())
}
