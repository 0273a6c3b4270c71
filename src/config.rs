//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`HOPPER_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use hopper_core::Tuning;
use serde::{Serialize, Deserialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Display configuration
    #[serde(default)]
    pub display: DisplayConfig,
    /// Level configuration
    #[serde(default)]
    pub level: LevelConfig,
    /// Movement tuning constants
    #[serde(default)]
    pub tuning: Tuning,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            display: DisplayConfig::default(),
            level: LevelConfig::default(),
            tuning: Tuning::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`HOPPER_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        // Load default config (required)
        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Load user config (optional)
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // HOPPER_DISPLAY__VIEW_WIDTH=320 -> display.view_width = 320
        figment = figment.merge(Env::prefixed("HOPPER_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Viewport width in pixels
    pub view_width: i32,
    /// Viewport height in pixels
    pub view_height: i32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            view_width: 256,
            view_height: 224,
        }
    }
}

/// Level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelConfig {
    /// Path of the level file to load at startup
    pub path: String,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            path: "assets/levels/cavern.ron".to_string(),
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
