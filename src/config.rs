//! Render Settings
//! Image size, output location and fonts used by the renderer and save step.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Image size must be at least {min}x{min} pixels, got {width}x{height}")]
    TooSmall { width: u32, height: u32, min: u32 },
}

/// Settings for rendering and saving charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Canvas width in pixels, before trimming.
    pub width: u32,
    /// Canvas height in pixels, before trimming.
    pub height: u32,
    /// Directory saved charts are written to.
    pub output_dir: PathBuf,
    /// Background pixels kept around the content when trimming.
    pub trim_padding: u32,
    pub font_family: String,
}

impl RenderConfig {
    pub const MIN_SIZE: u32 = 200;

    /// Load settings from a JSON file; missing fields keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < Self::MIN_SIZE || self.height < Self::MIN_SIZE {
            return Err(ConfigError::TooSmall {
                width: self.width,
                height: self.height,
                min: Self::MIN_SIZE,
            });
        }
        Ok(())
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            output_dir: PathBuf::from("plots"),
            trim_padding: 10,
            font_family: "sans-serif".to_string(),
        }
    }
}
