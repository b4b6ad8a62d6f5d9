//! Processing configuration.
//!
//! Configuration only affects how a filter is executed (threads, sweep
//! strategy) and how decoded input is normalized. It never changes the
//! numeric result of a filter.

use crate::core::error::RasterResult;
use image::Rgb;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default background used when flattening transparent input (white).
pub const DEFAULT_BACKGROUND: [u8; 3] = [255, 255, 255];

/// Configuration for running filters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Whether to sweep rows in parallel.
    pub parallel: bool,
    /// Number of worker threads (0 = auto).
    pub num_threads: usize,
    /// Opaque color transparent pixels are composited over.
    pub background: [u8; 3],
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            num_threads: 0,
            background: DEFAULT_BACKGROUND,
        }
    }
}

impl ProcessingConfig {
    /// Create a new processing configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable parallel processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set the number of worker threads.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.num_threads = threads;
        self
    }

    /// Set the flattening background.
    pub fn with_background(mut self, background: [u8; 3]) -> Self {
        self.background = background;
        self
    }

    /// Background as an image pixel.
    pub fn background_pixel(&self) -> Rgb<u8> {
        Rgb(self.background)
    }

    /// Parse a configuration from TOML text. Missing keys take defaults.
    pub fn from_toml_str(text: &str) -> RasterResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load a configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> RasterResult<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml_str(&text)?;
        log::debug!("Loaded config from {}: {:?}", path.as_ref().display(), config);
        Ok(config)
    }
}
