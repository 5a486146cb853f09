//! Application configuration
//!
//! Sources, lowest to highest priority:
//! 1. `config/default.toml`
//! 2. `config/user.toml`
//! 3. Environment variables (`PORTFOLIO_SECTION__KEY`)
//!
//! Command line flags are applied on top by `main`.

use figment::{Figment, providers::{Env, Format, Toml}};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Which renderer draws the scenes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RendererKind {
    /// Styled 2D panels
    Flat,
    /// 3D scene graph
    Stage,
}

impl RendererKind {
    pub fn toggled(self) -> Self {
        match self {
            RendererKind::Flat => RendererKind::Stage,
            RendererKind::Stage => RendererKind::Flat,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub playback: PlaybackConfig,
    #[serde(default)]
    pub stage: StageConfig,
}

impl AppConfig {
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // PORTFOLIO_PLAYBACK__AUTOPLAY=true -> playback.autoplay = true
        figment = figment.merge(Env::prefixed("PORTFOLIO_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: i32,
    pub height: i32,
    pub fps: u32,
    pub vsync: bool,
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            width: crate::constants::RENDER_WIDTH / 2,
            height: crate::constants::RENDER_HEIGHT / 2,
            fps: crate::constants::FPS,
            vsync: true,
            resizable: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Start cycling scenes immediately
    pub autoplay: bool,
    /// Start with the scene chime silenced
    pub muted: bool,
    pub renderer: RendererKind,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            autoplay: false,
            muted: false,
            renderer: RendererKind::Stage,
        }
    }
}

/// Orbit camera tuning for the 3D renderer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StageConfig {
    /// Damping rate; higher follows the target faster (1/s)
    pub damping: f32,
    /// Radians per pixel of mouse drag
    pub orbit_sensitivity: f32,
    /// Distance change per wheel notch
    pub zoom_step: f32,
    /// Idle orbit speed (rad/s)
    pub auto_orbit: f32,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            damping: 6.0,
            orbit_sensitivity: 0.005,
            zoom_step: 1.5,
            auto_orbit: 0.0,
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
