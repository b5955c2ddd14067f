//! Presenter configuration loaded from JSON

use crate::DeckError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{info, warn};

/// Overview map geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Circle radius in layout units
    pub radius: f64,
    pub center_x: f64,
    pub center_y: f64,
    /// Scale applied when zooming into a slide
    pub zoom_factor: f64,
    /// Radius of each slide node
    pub node_radius: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            radius: 280.0,
            center_x: 350.0,
            center_y: 350.0,
            zoom_factor: 2.0,
            node_radius: 40.0,
        }
    }
}

/// Transition timing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Delay between clicking a node and the slide taking over
    pub transition_delay_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            transition_delay_ms: 600,
        }
    }
}

/// Native window settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub fullscreen: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
            fullscreen: false,
        }
    }
}

/// Where the presenter starts: `"overview"` or `{ "slide": n }` (1-based)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StartAt {
    #[default]
    Overview,
    Slide(usize),
}

/// Complete presenter configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresenterConfig {
    pub layout: LayoutConfig,
    pub timing: TimingConfig,
    pub window: WindowConfig,
    pub start: StartAt,
}

impl PresenterConfig {
    /// Read and validate a configuration file
    pub fn load(path: &Path) -> Result<Self, DeckError> {
        let json = std::fs::read_to_string(path)?;
        let config: PresenterConfig = serde_json::from_str(&json)?;
        config.validate()?;
        info!("Loaded presenter config from {:?}", path);
        Ok(config)
    }

    /// Load `path` if given, falling back to defaults on any error
    pub fn load_or_default(path: Option<&Path>) -> Self {
        match path {
            Some(path) => Self::load(path).unwrap_or_else(|e| {
                warn!("Ignoring config {:?}: {}", path, e);
                Self::default()
            }),
            None => Self::default(),
        }
    }

    /// Reject values the layout engine cannot use
    pub fn validate(&self) -> Result<(), DeckError> {
        if !(self.layout.radius > 0.0) {
            return Err(DeckError::Config(format!(
                "layout.radius must be positive, got {}",
                self.layout.radius
            )));
        }
        if !(self.layout.zoom_factor > 0.0) {
            return Err(DeckError::Config(format!(
                "layout.zoom_factor must be positive, got {}",
                self.layout.zoom_factor
            )));
        }
        if !(self.layout.node_radius > 0.0) {
            return Err(DeckError::Config(format!(
                "layout.node_radius must be positive, got {}",
                self.layout.node_radius
            )));
        }
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            return Err(DeckError::Config("window size must be positive".to_string()));
        }
        if self.start == StartAt::Slide(0) {
            return Err(DeckError::Config("start slide numbers begin at 1".to_string()));
        }
        Ok(())
    }

    pub fn transition_delay(&self) -> Duration {
        Duration::from_millis(self.timing.transition_delay_ms)
    }

    /// Zero-based start slide for a deck of `slide_count` slides.
    ///
    /// `None` means start in the overview, including when the configured
    /// slide does not exist.
    pub fn start_index(&self, slide_count: usize) -> Option<usize> {
        match self.start {
            StartAt::Overview => None,
            StartAt::Slide(number) if number >= 1 && number <= slide_count => Some(number - 1),
            StartAt::Slide(number) => {
                warn!("Start slide {} not in deck of {}", number, slide_count);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = PresenterConfig::default();
        assert_eq!(config.layout.radius, 280.0);
        assert_eq!(config.layout.center_x, 350.0);
        assert_eq!(config.layout.zoom_factor, 2.0);
        assert_eq!(config.transition_delay(), Duration::from_millis(600));
        assert_eq!(config.start, StartAt::Overview);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let file = write_config(r#"{ "layout": { "radius": 300 }, "start": { "slide": 4 } }"#);
        let config = PresenterConfig::load(file.path()).unwrap();
        assert_eq!(config.layout.radius, 300.0);
        assert_eq!(config.layout.center_y, 350.0);
        assert_eq!(config.timing.transition_delay_ms, 600);
        assert_eq!(config.start_index(19), Some(3));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let file = write_config(r#"{ "layout": { "radius": -1 } }"#);
        assert!(matches!(
            PresenterConfig::load(file.path()),
            Err(DeckError::Config(_))
        ));

        let file = write_config(r#"{ "start": { "slide": 0 } }"#);
        assert!(matches!(
            PresenterConfig::load(file.path()),
            Err(DeckError::Config(_))
        ));
    }

    #[test]
    fn test_load_or_default_falls_back() {
        let file = write_config("not json");
        let config = PresenterConfig::load_or_default(Some(file.path()));
        assert_eq!(config, PresenterConfig::default());
        assert_eq!(PresenterConfig::load_or_default(None), PresenterConfig::default());
    }

    #[test]
    fn test_start_index_out_of_range() {
        let config = PresenterConfig {
            start: StartAt::Slide(25),
            ..Default::default()
        };
        assert_eq!(config.start_index(19), None);
        assert_eq!(PresenterConfig::default().start_index(19), None);
    }

    #[test]
    fn test_start_overview_string() {
        let config: PresenterConfig = serde_json::from_str(r#"{ "start": "overview" }"#).unwrap();
        assert_eq!(config.start, StartAt::Overview);
    }
}
