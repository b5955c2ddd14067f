//! User interface components for the radial deck presenter
//!
//! This crate provides the egui rendering of the overview map, the slide
//! templates and the presenting chrome.

pub mod navigation_panel;
pub mod overview_map;
pub mod shell;
pub mod slide_view;
pub mod theme;
pub mod widget_utils;

use std::time::Instant;

/// Re-export commonly used types
pub use navigation_panel::{NavigationPanel, NavigationPanelConfig};
pub use overview_map::{OverviewMap, OverviewMapConfig, VisitedSlides};
pub use shell::{menu_bar, show_error_messages, ShellAction};
pub use slide_view::{SlideFade, SlideView};
pub use theme::{apply_theme, Theme};
pub use widget_utils::{GridExt, ScrollAreaExt, WidgetId};

/// UI state that persists across frames
#[derive(Default)]
pub struct UiState {
    /// Error messages to display
    pub error_messages: Vec<ErrorMessage>,
}

impl UiState {
    /// Queue an error banner
    pub fn push_error(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.error_messages.push(ErrorMessage {
            title: title.into(),
            message: message.into(),
            timestamp: Instant::now(),
        });
    }
}

/// Error message to display
pub struct ErrorMessage {
    pub title: String,
    pub message: String,
    pub timestamp: Instant,
}

/// Glyphs drawn in place of slide icons
pub mod icons {
    pub const HUB: &str = "🧭";
    pub const CHECK: &str = "✔";
    pub const BULLET: &str = "•";
    pub const POINT: &str = "▸";
    pub const ARROW_DOWN: &str = "⬇";
    pub const PREVIOUS: &str = "❮";
    pub const NEXT: &str = "❯";
    pub const MAP: &str = "🗺";
    pub const PIN: &str = "📍";

    /// Glyph for a named icon; unknown names fall back to a bullet
    pub fn glyph(name: &str) -> &'static str {
        match name.to_ascii_lowercase().as_str() {
            "brain" => "🧠",
            "cpu" => "💻",
            "download" => "⬇",
            "plus" => "➕",
            "terminal" => "⌨",
            "check" => CHECK,
            "file" => "📄",
            "server" => "🖥",
            "code" => "📝",
            "monitor" => "🖵",
            "graduation" => "🎓",
            "zap" => "⚡",
            "memory" => "🔲",
            "disk" => "💾",
            "network" => "🔗",
            "money" => "💰",
            "shield" => "🛡",
            "clock" => "⏱",
            "warning" => "⚠",
            "trend-down" => "📉",
            _ => BULLET,
        }
    }

}
