use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::constants::{MINIMUM_COLS, MINIMUM_ROWS};
use crate::fit::FitOptions;
use crate::geometry::GridFloor;

/// Configuration for termfit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub fit: FitConfig,
    pub font: FontConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitConfig {
    /// Smallest column count a fit may produce
    pub minimum_cols: usize,
    /// Smallest row count a fit may produce
    pub minimum_rows: usize,
    /// Subtract the viewport's scrollbar width from the available width
    pub reserve_scrollbar: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// Font size in points, used when cell metrics come from a font file
    pub size: f32,
    /// DPI scale applied on top of `size`
    pub scale_factor: f64,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            minimum_cols: MINIMUM_COLS,
            minimum_rows: MINIMUM_ROWS,
            reserve_scrollbar: true,
        }
    }
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            size: 14.0,
            scale_factor: 1.0,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("fit.minimum_cols must be at least 1")]
    ZeroMinimumCols,
    #[error("fit.minimum_rows must be at least 1")]
    ZeroMinimumRows,
    #[error("font.size must be a positive number, got {0}")]
    InvalidFontSize(f32),
    #[error("font.scale_factor must be a positive number, got {0}")]
    InvalidScaleFactor(f64),
}

impl Config {
    /// Load configuration from file, or create default if not exists
    pub fn load(path: Option<PathBuf>) -> anyhow::Result<Self> {
        let config_path = match path {
            Some(path) => path,
            None => default_path()?,
        };

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&contents)?;
            config.validate()?;
            Ok(config)
        } else {
            let config = Config::default();
            config.write_to(&config_path)?;
            Ok(config)
        }
    }

    /// Save configuration to file
    pub fn save(&self, path: Option<PathBuf>) -> anyhow::Result<()> {
        let config_path = match path {
            Some(path) => path,
            None => default_path()?,
        };
        self.write_to(&config_path)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fit.minimum_cols == 0 {
            return Err(ConfigError::ZeroMinimumCols);
        }
        if self.fit.minimum_rows == 0 {
            return Err(ConfigError::ZeroMinimumRows);
        }
        if !(self.font.size.is_finite() && self.font.size > 0.0) {
            return Err(ConfigError::InvalidFontSize(self.font.size));
        }
        if !(self.font.scale_factor.is_finite() && self.font.scale_factor > 0.0) {
            return Err(ConfigError::InvalidScaleFactor(self.font.scale_factor));
        }
        Ok(())
    }

    fn write_to(&self, config_path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(config_path, contents)?;
        Ok(())
    }
}

impl From<&FitConfig> for FitOptions {
    fn from(config: &FitConfig) -> Self {
        Self {
            floor: GridFloor {
                cols: config.minimum_cols,
                rows: config.minimum_rows,
            },
            reserve_scrollbar: config.reserve_scrollbar,
        }
    }
}

fn default_path() -> anyhow::Result<PathBuf> {
    let mut path = dirs::config_dir()
        .ok_or_else(|| anyhow::anyhow!("No config directory"))?;
    path.push("termfit");
    path.push("config.toml");
    Ok(path)
}

mod dirs {
    use std::path::PathBuf;

    pub fn config_dir() -> Option<PathBuf> {
        std::env::var_os("HOME").map(|home| {
            let mut path = PathBuf::from(home);
            path.push(".config");
            path
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_grid_minimums() {
        let config = Config::default();
        assert_eq!(config.fit.minimum_cols, 2);
        assert_eq!(config.fit.minimum_rows, 1);
        assert!(config.fit.reserve_scrollbar);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load(Some(path.clone())).unwrap();
        assert_eq!(config, Config::default());
        assert!(path.exists());

        // Second load reads back what was written
        let reloaded = Config::load(Some(path)).unwrap();
        assert_eq!(reloaded, config);
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[fit]\nminimum_cols = 20\n").unwrap();

        let config = Config::load(Some(path)).unwrap();
        assert_eq!(config.fit.minimum_cols, 20);
        assert_eq!(config.fit.minimum_rows, 1);
        assert!(config.fit.reserve_scrollbar);
        assert_eq!(config.font, FontConfig::default());
    }

    #[test]
    fn test_load_rejects_zero_minimum() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[fit]\nminimum_rows = 0\n").unwrap();

        let err = Config::load(Some(path)).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ConfigError>(),
            Some(&ConfigError::ZeroMinimumRows)
        );
    }

    #[test]
    fn test_validate_font() {
        let mut config = Config::default();
        config.font.scale_factor = 0.0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidScaleFactor(0.0)));

        config.font.scale_factor = 2.0;
        config.font.size = -1.0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidFontSize(-1.0)));
    }

    #[test]
    fn test_save_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.fit.reserve_scrollbar = false;
        config.save(Some(path.clone())).unwrap();

        assert_eq!(Config::load(Some(path)).unwrap(), config);
    }

    #[test]
    fn test_fit_options_from_config() {
        let config = FitConfig {
            minimum_cols: 10,
            minimum_rows: 3,
            reserve_scrollbar: false,
        };
        let options = FitOptions::from(&config);
        assert_eq!(options.floor, GridFloor { cols: 10, rows: 3 });
        assert!(!options.reserve_scrollbar);
    }
}
