//! Configuration for svgraster
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats; the default location is a platform-specific config
//! directory.
//!
//! Configuration is organized into sections:
//! - Render settings (background, anti-aliasing, output scale)
//! - Logging settings (default level)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use svgraster_core::Color;
use tracing::debug;

use crate::error::{SettingsError, SettingsResult};

/// Accepted values for `logging.level`.
pub const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Rasterization preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Canvas fill color before any shape is drawn
    pub background: String,
    /// Smooth shape edges instead of hard pixel coverage
    pub anti_alias: bool,
    /// Integer upscale factor applied to the whole scene
    pub scale: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            background: "white".to_string(),
            anti_alias: false,
            scale: 1,
        }
    }
}

impl RenderSettings {
    pub fn background_color(&self) -> SettingsResult<Color> {
        self.background
            .parse()
            .map_err(|e| SettingsError::invalid("render.background", format!("{}", e)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default tracing level, overridden by `RUST_LOG`
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub render: RenderSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(SettingsError::UnsupportedFormat(format!(
                "{} (config file must be .json or .toml)",
                other.unwrap_or("no extension")
            ))),
        }
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML), creating parent directories
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match ConfigFormat::from_path(path)? {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        debug!("Saved config to {}", path.display());

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        self.render.background_color()?;

        if self.render.scale == 0 {
            return Err(SettingsError::invalid("render.scale", "must be at least 1"));
        }

        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(SettingsError::invalid(
                "logging.level",
                format!(
                    "{:?} is not one of {}",
                    self.logging.level,
                    LOG_LEVELS.join(", ")
                ),
            ));
        }

        Ok(())
    }

    /// Platform config location, e.g. `~/.config/svgraster/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("svgraster").join("config.toml"))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory(
                    "platform config directory is unavailable".to_string(),
                )
            })
    }

    /// Loads the config at [`Config::default_path`], or defaults when absent.
    pub fn load_or_default() -> SettingsResult<Self> {
        match Self::default_path() {
            Ok(path) if path.exists() => Self::load_from_file(&path),
            Ok(_) | Err(SettingsError::ConfigDirectory(_)) => Ok(Self::default()),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::new();
        assert_eq!(config.render.background, "white");
        assert!(!config.render.anti_alias);
        assert_eq!(config.render.scale, 1);
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
        assert_eq!(config.render.background_color().unwrap(), Color::WHITE);
    }

    #[test]
    fn test_validate_rejects_zero_scale() {
        let mut config = Config::new();
        config.render.scale = 0;
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid setting 'render.scale': must be at least 1"
        );
    }

    #[test]
    fn test_validate_rejects_bad_background() {
        let mut config = Config::new();
        config.render.background = "chartreuse-ish".to_string();
        assert!(matches!(
            config.validate(),
            Err(SettingsError::InvalidSetting { ref key, .. }) if key == "render.background"
        ));
    }

    #[test]
    fn test_validate_rejects_unknown_level() {
        let mut config = Config::new();
        config.logging.level = "loud".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str("[render]\nscale = 3\n").unwrap();
        assert_eq!(config.render.scale, 3);
        assert_eq!(config.render.background, "white");
        assert_eq!(config.logging, LoggingSettings::default());
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            ConfigFormat::from_path(Path::new("a.json")).unwrap(),
            ConfigFormat::Json
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("a.toml")).unwrap(),
            ConfigFormat::Toml
        );
        assert!(matches!(
            ConfigFormat::from_path(Path::new("a.yaml")),
            Err(SettingsError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_default_path_file_name() {
        if let Ok(path) = Config::default_path() {
            assert!(path.ends_with("svgraster/config.toml"));
        }
    }
}
