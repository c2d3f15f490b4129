//! Persistent settings for nalssi.
//!
//! Settings live in `config.toml` under the platform config directory. A
//! missing file yields defaults; out-of-range values are clamped on load.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use nalssi_core::{ThemeMode, WeatherCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// File name of the settings file inside the config directory.
pub const CONFIG_FILE: &str = "config.toml";

const MIN_FRAME_INTERVAL_MS: u64 = 16;
const MAX_FRAME_INTERVAL_MS: u64 = 1_000;
const MIN_PIXEL_SCALE: f32 = 0.25;
const MAX_PIXEL_SCALE: f32 = 8.0;

/// Errors that can occur while reading or writing settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to access config file: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("No config directory available on this platform")]
    NoConfigDir,
}

/// User settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Colour theme of the backdrop.
    pub theme: ThemeMode,
    /// Weather code shown at startup.
    pub weather_code: i32,
    /// Delay between frames in milliseconds.
    pub frame_interval_ms: u64,
    /// Viewport pixels per canvas pixel.
    pub pixel_scale: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemeMode::Dark,
            weather_code: 0,
            frame_interval_ms: 33,
            pixel_scale: 1.0,
        }
    }
}

impl Config {
    /// Clamp every value into its accepted range.
    pub fn sanitized(mut self) -> Self {
        self.frame_interval_ms = self
            .frame_interval_ms
            .clamp(MIN_FRAME_INTERVAL_MS, MAX_FRAME_INTERVAL_MS);
        self.pixel_scale = if self.pixel_scale.is_finite() {
            self.pixel_scale.clamp(MIN_PIXEL_SCALE, MAX_PIXEL_SCALE)
        } else {
            1.0
        };
        self
    }

    pub fn weather_code(&self) -> WeatherCode {
        WeatherCode(self.weather_code)
    }

    /// Load settings from the default location.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&config_path()?)
    }

    /// Load settings from `path`, falling back to defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::debug!("no config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(err) => return Err(err.into()),
        };
        let config: Self = toml::from_str(&text)?;
        log::debug!("loaded config from {}", path.display());
        Ok(config.sanitized())
    }

    /// Save settings to the default location.
    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let path = config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save settings to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let text = toml::to_string_pretty(self)?;
        fs::write(path, text)?;
        log::debug!("saved config to {}", path.display());
        Ok(())
    }
}

/// Location of the settings file.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    project_dirs()
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
        .ok_or(ConfigError::NoConfigDir)
}

/// Platform directories for nalssi.
pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "nalssi")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.theme, ThemeMode::Dark);
        assert_eq!(config.weather_code(), WeatherCode(0));
        assert_eq!(config.frame_interval_ms, 33);
        assert_eq!(config.pixel_scale, 1.0);
        assert_eq!(config.clone().sanitized(), config);
    }

    #[test]
    fn test_sanitized_clamps() {
        let config = Config {
            frame_interval_ms: 1,
            pixel_scale: 100.0,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(config.frame_interval_ms, 16);
        assert_eq!(config.pixel_scale, 8.0);

        let config = Config {
            frame_interval_ms: 60_000,
            pixel_scale: f32::NAN,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(config.frame_interval_ms, 1_000);
        assert_eq!(config.pixel_scale, 1.0);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str("theme = \"light\"\nweather_code = 61\n").unwrap();
        assert_eq!(config.theme, ThemeMode::Light);
        assert_eq!(config.weather_code, 61);
        assert_eq!(config.frame_interval_ms, 33);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE);
        let config = Config {
            theme: ThemeMode::Light,
            weather_code: 75,
            frame_interval_ms: 50,
            pixel_scale: 2.0,
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "theme = [").unwrap();
        assert!(matches!(Config::load_from(&path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_unknown_theme_is_parse_error() {
        assert!(toml::from_str::<Config>("theme = \"sepia\"").is_err());
    }
}
