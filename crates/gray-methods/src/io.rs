//! JSON configuration and report helpers.

use std::fs;
use std::path::{Path, PathBuf};

use gray_methods_core::Method;
use gray_methods_montage::MontageLayout;
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn default_caption() -> String {
    "RGB to grayscale conversion methods".to_string()
}

/// Configuration for a comparison run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareConfig {
    pub image_path: String,
    #[serde(default)]
    pub output_path: Option<String>,
    #[serde(default)]
    pub report_path: Option<String>,
    #[serde(default = "default_caption")]
    pub caption: String,
    #[serde(default)]
    pub layout: MontageLayout,
}

impl CompareConfig {
    /// Defaults for the given input image.
    pub fn new(image_path: impl Into<String>) -> Self {
        Self {
            image_path: image_path.into(),
            output_path: None,
            report_path: None,
            caption: default_caption(),
            layout: MontageLayout::default(),
        }
    }

    /// Load a JSON config from disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this config to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Resolve the output figure path; defaults next to the input.
    pub fn output_path(&self) -> PathBuf {
        self.output_path
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| Path::new(&self.image_path).with_extension("grayscale.png"))
    }
}

/// Intensity range of one grayscale map, as rendered into the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodRange {
    pub method: Method,
    pub min: f64,
    pub max: f64,
}

/// Stage timings in milliseconds.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimingsMs {
    pub load_image: u64,
    pub convert: u64,
    pub render: u64,
    pub total: u64,
}

/// Result summary of a comparison run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareReport {
    pub image_path: String,
    pub output_path: String,
    pub width: usize,
    pub height: usize,
    pub methods: Vec<MethodRange>,
    pub timings_ms: TimingsMs,
}

impl CompareReport {
    /// Load a report from JSON on disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this report to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
