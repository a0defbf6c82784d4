//! Configuration management module
//!
//! Handles loading, saving, and validation of the funnel's timing and input
//! settings.

use crate::{FunnelError, Result, APP_NAME, CONFIG_FILE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

/// Full application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FunnelConfig {
    pub ui: UiConfig,
    pub quiz: QuizConfig,
    pub loading: LoadingConfig,
    pub sales: SalesConfig,
}

/// Terminal settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Maximum wait for a key before the screen is redrawn
    #[serde(with = "duration_format")]
    pub tick_rate: Duration,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(50),
        }
    }
}

/// Quiz input settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    /// Inclusive upper bound for numeric answers
    pub input_limit: f64,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self { input_limit: 200.0 }
    }
}

/// Simulated analysis settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadingConfig {
    /// Time per percentage point
    #[serde(with = "duration_format")]
    pub tick_interval: Duration,
}

impl Default for LoadingConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(80),
        }
    }
}

/// Offer page timers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SalesConfig {
    /// Initial offer countdown
    #[serde(with = "duration_format")]
    pub countdown: Duration,
    /// Delay before the first purchase popup
    #[serde(with = "duration_format")]
    pub popup_initial_delay: Duration,
    /// How long a popup stays visible
    #[serde(with = "duration_format")]
    pub popup_visible: Duration,
    /// Shortest hidden gap between popups
    #[serde(with = "duration_format")]
    pub popup_gap_min: Duration,
    /// Longest hidden gap between popups
    #[serde(with = "duration_format")]
    pub popup_gap_max: Duration,
    /// Time between carousel moves
    #[serde(with = "duration_format")]
    pub carousel_interval: Duration,
}

impl Default for SalesConfig {
    fn default() -> Self {
        Self {
            countdown: Duration::from_secs(600),
            popup_initial_delay: Duration::from_secs(3),
            popup_visible: Duration::from_secs(4),
            popup_gap_min: Duration::from_secs(5),
            popup_gap_max: Duration::from_secs(10),
            carousel_interval: Duration::from_secs(3),
        }
    }
}

impl FunnelConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the numeric input bound
    pub fn with_input_limit(mut self, limit: f64) -> Self {
        self.quiz.input_limit = limit;
        self
    }

    /// Set the loading tick interval
    pub fn with_loading_tick(mut self, interval: Duration) -> Self {
        self.loading.tick_interval = interval;
        self
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        let durations = [
            ("ui.tick_rate", self.ui.tick_rate),
            ("loading.tick_interval", self.loading.tick_interval),
            ("sales.countdown", self.sales.countdown),
            ("sales.popup_initial_delay", self.sales.popup_initial_delay),
            ("sales.popup_visible", self.sales.popup_visible),
            ("sales.popup_gap_min", self.sales.popup_gap_min),
            ("sales.popup_gap_max", self.sales.popup_gap_max),
            ("sales.carousel_interval", self.sales.carousel_interval),
        ];
        for (name, duration) in durations {
            if duration.is_zero() {
                return Err(FunnelError::ConfigError(format!(
                    "{} must be greater than 0",
                    name
                )));
            }
        }

        if self.sales.popup_gap_min > self.sales.popup_gap_max {
            return Err(FunnelError::ConfigError(
                "sales.popup_gap_min must not exceed sales.popup_gap_max".to_string(),
            ));
        }

        let limit = self.quiz.input_limit;
        if !limit.is_finite() || limit <= 0.0 {
            return Err(FunnelError::ConfigError(format!(
                "quiz.input_limit must be a positive number, got {}",
                limit
            )));
        }

        Ok(())
    }

    /// Load configuration from the standard config file location.
    /// Returns default configuration if the file doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Load configuration from an explicit path
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_path).map_err(|e| {
            FunnelError::ConfigError(format!(
                "Failed to read config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            FunnelError::ConfigError(format!(
                "Failed to parse config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        config.validate()?;

        Ok(config)
    }

    /// Load configuration, writing the defaults on first run so there is a
    /// file to edit. A failed write is logged and does not stop startup
    pub fn load_or_create() -> Result<Self> {
        let config = Self::load()?;
        let config_path = Self::config_file_path()?;
        if !config_path.exists() {
            match config.save() {
                Ok(()) => info!(path = %config_path.display(), "wrote default configuration"),
                Err(e) => warn!(error = %e, "could not write default configuration"),
            }
        }
        Ok(config)
    }

    /// Save configuration to the standard config file location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                FunnelError::ConfigError(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let content = toml::to_string_pretty(self)?;

        fs::write(config_path, content).map_err(|e| {
            FunnelError::ConfigError(format!(
                "Failed to write config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        Ok(())
    }

    /// Get the standard configuration file path
    /// Uses $CONFIG_HOME/quizfunnel/quizfunnel.toml
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            FunnelError::ConfigError("Unable to determine config directory".to_string())
        })?;

        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}

/// Durations as human-readable strings such as `"80ms"` or `"10m"`
mod duration_format {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&humantime::format_duration(*duration).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let text = String::deserialize(deserializer)?;
        humantime::parse_duration(&text).map_err(D::Error::custom)
    }
}
