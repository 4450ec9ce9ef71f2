//! Batch configuration.
//!
//! Every knob of a batch run lives in [`BatchConfig`]. It can be built in
//! code, parsed from TOML, or assembled by the command line. Missing keys
//! take their defaults:
//!
//! ```toml
//! dataset-root = "dataset"
//! extension = ".png"
//! angle-degrees = 90.0
//! output-suffix = "-r"
//! output-dir = "."
//! filter = "bilinear"
//! fill = 0
//! on-error = "fail-fast"
//! # shrink-factor = 0.2
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::transform::{InterpolationFilter, RotationOptions};

/// Errors that can occur while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for this schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value is outside its allowed range.
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// What the batch driver does when a single file fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorPolicy {
    /// Abort the batch on the first failing file.
    #[default]
    FailFast,
    /// Log the failure, record it in the report and move on.
    Continue,
}

/// Configuration for a batch run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct BatchConfig {
    /// Directory tree to scan.
    pub dataset_root: PathBuf,
    /// File-name suffix selecting the images to process.
    pub extension: String,
    /// Rotation angle in degrees, positive = counter-clockwise.
    pub angle_degrees: f64,
    /// Optional horizontal shrink applied before rotation.
    pub shrink_factor: Option<f64>,
    /// Marker inserted before the extension of each output file name.
    pub output_suffix: String,
    /// Directory receiving the output files.
    pub output_dir: PathBuf,
    pub filter: InterpolationFilter,
    pub fill: u8,
    pub on_error: ErrorPolicy,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            dataset_root: PathBuf::from("dataset"),
            extension: ".png".to_string(),
            angle_degrees: 90.0,
            shrink_factor: None,
            output_suffix: "-r".to_string(),
            output_dir: PathBuf::from("."),
            filter: InterpolationFilter::default(),
            fill: 0,
            on_error: ErrorPolicy::default(),
        }
    }
}

impl BatchConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Read and parse a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Check that every value is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.angle_degrees.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "angle-degrees must be finite, got {}",
                self.angle_degrees
            )));
        }
        if let Some(factor) = self.shrink_factor {
            if !factor.is_finite() || !(0.0..1.0).contains(&factor) {
                return Err(ConfigError::Invalid(format!(
                    "shrink-factor must be in [0, 1), got {factor}"
                )));
            }
        }
        if self.extension.is_empty() {
            return Err(ConfigError::Invalid("extension must not be empty".to_string()));
        }
        if self.output_suffix.is_empty() {
            // Outputs would overwrite their sources when output-dir is the dataset
            return Err(ConfigError::Invalid(
                "output-suffix must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn rotation_options(&self) -> RotationOptions {
        RotationOptions {
            filter: self.filter,
            fill: self.fill,
        }
    }
}
