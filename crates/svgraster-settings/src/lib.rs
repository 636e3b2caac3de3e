//! svgraster Settings Crate
//!
//! Handles render and logging configuration and its file persistence.

pub mod config;
pub mod error;

pub use config::{Config, LoggingSettings, RenderSettings, LOG_LEVELS};
pub use error::{SettingsError, SettingsResult};
