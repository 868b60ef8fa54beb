//! Matcher configuration with YAML loading.
//!
//! All tuning knobs live in [`MatcherConfig`], grouped into sections that
//! mirror the pipeline stages: stitching, similarity scoring, diagonal
//! scanning, and match validation. Every field carries a serde default,
//! so a partial YAML file yields the built-in values for whatever it
//! leaves out.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error raised when a configuration file cannot be loaded.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// File could not be read.
    #[error("failed to read config file: {0}")]
    Io(String),
    /// YAML did not parse into a valid configuration.
    #[error("failed to parse config: {0}")]
    Parse(String),
}

/// Full matcher configuration loadable from YAML.
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct MatcherConfig {
    /// Segment stitching settings
    #[serde(default)]
    pub stitching: StitchingConfig,

    /// Line similarity scoring settings
    #[serde(default)]
    pub similarity: SimilarityConfig,

    /// Diagonal scanning settings
    #[serde(default)]
    pub scanning: ScanningConfig,

    /// Match validation settings
    #[serde(default)]
    pub validation: ValidationConfig,
}

impl MatcherConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Parse configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

/// Segment stitching settings.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct StitchingConfig {
    /// Maximum distance between endpoints for two lines to be considered
    /// connected. Same unit as line coordinates.
    /// Default: 5.0
    #[serde(default = "default_connection_tolerance")]
    pub connection_tolerance: f32,
}

impl Default for StitchingConfig {
    fn default() -> Self {
        Self {
            connection_tolerance: default_connection_tolerance(),
        }
    }
}

impl StitchingConfig {
    /// Create settings with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for the connection tolerance.
    pub fn with_connection_tolerance(mut self, value: f32) -> Self {
        self.connection_tolerance = value;
        self
    }
}

/// Line similarity scoring settings.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SimilarityConfig {
    /// Angular difference, in degrees, at which the angle weight decays
    /// to zero.
    /// Default: 10.0
    #[serde(default = "default_angle_tolerance_deg")]
    pub angle_tolerance_deg: f32,

    /// Length difference at which the length weight decays to zero.
    /// Default: 11.0
    #[serde(default = "default_length_tolerance")]
    pub length_tolerance: f32,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            angle_tolerance_deg: default_angle_tolerance_deg(),
            length_tolerance: default_length_tolerance(),
        }
    }
}

impl SimilarityConfig {
    /// Create settings with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for the angle tolerance (degrees).
    pub fn with_angle_tolerance_deg(mut self, value: f32) -> Self {
        self.angle_tolerance_deg = value;
        self
    }

    /// Builder-style setter for the length tolerance.
    pub fn with_length_tolerance(mut self, value: f32) -> Self {
        self.length_tolerance = value;
        self
    }
}

/// Diagonal scanning settings.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ScanningConfig {
    /// Minimum similarity for a matrix cell to take part in a run.
    /// Default: 0.4
    #[serde(default = "default_similarity_threshold")]
    pub similarity_threshold: f32,

    /// Minimum run length for a candidate match. Values below 2 are
    /// treated as 2: a single line pair carries no usable statistics.
    /// Default: 2
    #[serde(default = "default_min_run_length")]
    pub min_run_length: usize,
}

impl Default for ScanningConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: default_similarity_threshold(),
            min_run_length: default_min_run_length(),
        }
    }
}

impl ScanningConfig {
    /// Create settings with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for the similarity threshold.
    pub fn with_similarity_threshold(mut self, value: f32) -> Self {
        self.similarity_threshold = value;
        self
    }

    /// Builder-style setter for the minimum run length.
    pub fn with_min_run_length(mut self, value: usize) -> Self {
        self.min_run_length = value;
        self
    }

    /// Minimum run length with the lower bound applied.
    pub fn effective_min_run_length(&self) -> usize {
        self.min_run_length.max(2)
    }
}

/// Match validation settings.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ValidationConfig {
    /// Angular standard deviation, in degrees, at or above which a
    /// candidate is rejected.
    /// Default: 5.0
    #[serde(default = "default_max_angle_deviation_deg")]
    pub max_angle_deviation_deg: f32,

    /// Positional standard deviation at or above which a candidate is
    /// rejected.
    /// Default: 5.0
    #[serde(default = "default_max_position_deviation")]
    pub max_position_deviation: f32,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_angle_deviation_deg: default_max_angle_deviation_deg(),
            max_position_deviation: default_max_position_deviation(),
        }
    }
}

impl ValidationConfig {
    /// Create settings with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for the angular deviation limit (degrees).
    pub fn with_max_angle_deviation_deg(mut self, value: f32) -> Self {
        self.max_angle_deviation_deg = value;
        self
    }

    /// Builder-style setter for the positional deviation limit.
    pub fn with_max_position_deviation(mut self, value: f32) -> Self {
        self.max_position_deviation = value;
        self
    }
}

fn default_connection_tolerance() -> f32 {
    5.0
}

fn default_angle_tolerance_deg() -> f32 {
    10.0
}

fn default_length_tolerance() -> f32 {
    11.0
}

fn default_similarity_threshold() -> f32 {
    0.4
}

fn default_min_run_length() -> usize {
    2
}

fn default_max_angle_deviation_deg() -> f32 {
    5.0
}

fn default_max_position_deviation() -> f32 {
    5.0
}
