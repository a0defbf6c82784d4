//! quizfunnel - terminal quiz funnel
//!
//! A lifestyle quiz collects answers step by step, a simulated analysis
//! screen counts up to 100%, and a sales page renders a personalised offer
//! from the collected answers.

use std::fmt;

pub mod app;
pub mod config;
pub mod loading;
pub mod logging;
pub mod models;
pub mod quiz;
pub mod sales;
pub mod timers;

// Common error types
#[derive(Debug)]
pub enum FunnelError {
    /// I/O operation failed
    IoError(std::io::Error),
    /// Configuration validation or parsing error
    ConfigError(String),
    /// TUI rendering or interaction error
    TuiError(String),
}

impl fmt::Display for FunnelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FunnelError::IoError(err) => write!(f, "I/O error: {}", err),
            FunnelError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            FunnelError::TuiError(msg) => write!(f, "TUI error: {}", msg),
        }
    }
}

impl std::error::Error for FunnelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FunnelError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for FunnelError {
    fn from(err: std::io::Error) -> Self {
        FunnelError::IoError(err)
    }
}

impl From<toml::de::Error> for FunnelError {
    fn from(err: toml::de::Error) -> Self {
        FunnelError::ConfigError(format!("TOML parsing error: {}", err))
    }
}

impl From<toml::ser::Error> for FunnelError {
    fn from(err: toml::ser::Error) -> Self {
        FunnelError::ConfigError(format!("TOML serialization error: {}", err))
    }
}

/// Result type alias for quizfunnel operations
pub type Result<T> = std::result::Result<T, FunnelError>;

/// Error handling utilities
pub mod error {
    use super::FunnelError;

    /// Convert error to a message suitable for printing after the terminal
    /// has been restored
    pub fn user_friendly_message(error: &FunnelError) -> String {
        match error {
            FunnelError::ConfigError(msg) => {
                format!("Configuration error: {}. Check your settings file.", msg)
            }
            FunnelError::TuiError(msg) => {
                format!("Terminal error: {}. Try a larger or different terminal.", msg)
            }
            FunnelError::IoError(err) => format!("I/O error: {}", err),
        }
    }
}

// Common types and constants
pub const APP_NAME: &str = "quizfunnel";
pub const CONFIG_FILE: &str = "quizfunnel.toml";
pub const LOG_DIR_ENV: &str = "QUIZFUNNEL_LOG_DIR";
pub const LOG_FILE: &str = "quizfunnel.log";
