//! Application configuration.
//!
//! Settings live in an explicit [`AppConfig`] value that the application
//! builds at startup (from defaults or a YAML file) and passes around.
//! Loading a config never touches the filesystem beyond reading the file;
//! creating the output directories is a separate [`AppConfig::init_dirs`]
//! step.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::CurveError;
use crate::generator::{CurveGenerator, DEFAULT_RESOLUTION};
use crate::style::LineStyle;

/// Errors from loading or applying a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Curve(#[from] CurveError),
}

/// Application-wide settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where presets are saved when no explicit path is given
    pub presets_dir: PathBuf,

    /// Where exported figure data goes by default
    pub images_dir: PathBuf,

    /// Sample count for new generators
    pub resolution: usize,

    /// Style applied when the user picks none
    pub default_style: LineStyle,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            presets_dir: PathBuf::from("files/presets"),
            images_dir: PathBuf::from("files/pics"),
            resolution: DEFAULT_RESOLUTION,
            default_style: LineStyle::default(),
        }
    }
}

/// An annotated configuration file showing every setting.
pub const EXAMPLE_CONFIG: &str = r#"# Example lissajous configuration
presets_dir: files/presets   # default location for saved presets
images_dir: files/pics       # default location for exported figure data
resolution: 1000             # samples per axis

default_style:
  color: midnightblue
  linewidth: 2
"#;

impl AppConfig {
    /// Parse YAML; missing keys take their defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Load a YAML config file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config = Self::from_yaml(&content)?;
        info!("loaded config {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), CurveError> {
        if self.resolution == 0 {
            return Err(CurveError::InvalidConfiguration(
                "resolution must be a positive sample count".to_string(),
            ));
        }
        self.default_style.validate()
    }

    /// Create the preset and image directories if they don't exist yet.
    pub fn init_dirs(&self) -> Result<(), ConfigError> {
        for dir in [&self.presets_dir, &self.images_dir] {
            if !dir.is_dir() {
                fs::create_dir_all(dir)?;
                info!("created {}", dir.display());
            }
        }
        Ok(())
    }

    /// A generator set to the configured resolution.
    pub fn generator(&self) -> Result<CurveGenerator, ConfigError> {
        Ok(CurveGenerator::new(self.resolution)?)
    }
}
