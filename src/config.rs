//! User configuration
//!
//! Loaded from `~/.config/commitscope/config.toml` (or `--config FILE`).
//! Every field has a default, so a missing file or a partial file is fine.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Repository whose commits are linked to when none is configured
pub const DEFAULT_REPOSITORY: &str = "jwhisler1117/portfolio";

/// Errors from reading the config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub repository: RepositoryConfig,
    pub chart: ChartConfig,
    pub story: StoryConfig,
    pub slider: SliderConfig,
    /// Write logs here instead of discarding them
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RepositoryConfig {
    /// `owner/name` used to build commit links
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Radius of the smallest commit, in chart pixels
    pub radius_min: f64,
    /// Radius of the largest commit, in chart pixels
    pub radius_max: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StoryConfig {
    /// Trigger line as a fraction of the story pane height
    pub trigger: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    /// Progress change per arrow key press
    pub step: f64,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_REPOSITORY.to_string(),
        }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            radius_min: 2.0,
            radius_max: 30.0,
        }
    }
}

impl Default for StoryConfig {
    fn default() -> Self {
        Self { trigger: 0.5 }
    }
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self { step: 1.0 }
    }
}

impl Config {
    /// Default config location
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("commitscope").join("config.toml"))
    }

    /// Load the config.
    ///
    /// An explicit `path` must be readable; the default location is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path().filter(|p| p.exists()) {
                Some(path) => path,
                None => return Ok(Self::default()),
            },
        };

        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let config = Self::from_toml_str(&content).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;
        tracing::info!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Parse and normalize a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<Self>(content).map(Self::normalized)
    }

    /// Clamp values into their valid ranges
    pub fn normalized(mut self) -> Self {
        let defaults = Self::default();

        let trigger = self.story.trigger;
        self.story.trigger = if trigger.is_finite() {
            trigger.clamp(0.0, 1.0)
        } else {
            defaults.story.trigger
        };

        let ChartConfig {
            radius_min,
            radius_max,
        } = self.chart;
        if radius_min.is_finite() && radius_max.is_finite() {
            self.chart.radius_min = radius_min.min(radius_max).max(0.0);
            self.chart.radius_max = radius_min.max(radius_max).max(0.0);
        } else {
            self.chart = defaults.chart;
        }

        if !(self.slider.step.is_finite() && self.slider.step > 0.0) {
            self.slider.step = defaults.slider.step;
        }

        if self.repository.name.trim().is_empty() {
            self.repository.name = defaults.repository.name;
        }
        self
    }

    pub fn radius_range(&self) -> (f64, f64) {
        (self.chart.radius_min, self.chart.radius_max)
    }
}
