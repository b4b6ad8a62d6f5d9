//! Execution engine implementation.
//!
//! The engine runs one validated [`FilterSpec`] against one image according
//! to a [`ProcessingConfig`], and reports timing statistics.

use crate::core::config::ProcessingConfig;
use crate::core::error::{FilterError, FilterResult, RasterResult};
use crate::core::types::{Parallelism, PixelBuffer};
use crate::filters::dispatch::FilterSpec;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Instant;

/// Statistics about a single filter run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionStats {
    /// The filter and parameters that ran.
    pub filter: FilterSpec,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Wall-clock time spent in the filter, in milliseconds.
    pub duration_ms: u64,
    /// Whether the parallel sweep was used.
    pub parallel: bool,
}

impl ExecutionStats {
    /// Write these statistics to `path` as pretty-printed JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> RasterResult<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        debug!("Wrote run report to {}", path.display());
        Ok(())
    }
}

/// Result of running a filter.
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    /// The filtered image.
    pub image: PixelBuffer,
    /// Run statistics.
    pub stats: ExecutionStats,
}

/// Runs filters according to a processing configuration.
pub struct ExecutionEngine {
    config: ProcessingConfig,
    pool: Option<rayon::ThreadPool>,
}

impl ExecutionEngine {
    /// Create an engine. A dedicated thread pool is built when the
    /// configuration asks for a fixed number of threads.
    pub fn new(config: ProcessingConfig) -> Self {
        let pool = if config.parallel && config.num_threads > 0 {
            match rayon::ThreadPoolBuilder::new()
                .num_threads(config.num_threads)
                .build()
            {
                Ok(pool) => Some(pool),
                Err(e) => {
                    warn!("Could not build a {}-thread pool, using the global pool: {}", config.num_threads, e);
                    None
                }
            }
        } else {
            None
        };

        Self { config, pool }
    }

    /// The configuration this engine runs with.
    pub fn config(&self) -> &ProcessingConfig {
        &self.config
    }

    /// Sweep mode derived from the configuration.
    pub fn parallelism(&self) -> Parallelism {
        Parallelism::from_flag(self.config.parallel)
    }

    /// Run `spec` on `image`.
    pub fn execute(&self, spec: &FilterSpec, image: &PixelBuffer) -> FilterResult<ExecutionResult> {
        let parallelism = self.parallelism();
        let start = Instant::now();

        let run = || spec.apply(image, parallelism);
        let output = match &self.pool {
            Some(pool) => pool.install(run),
            None => run(),
        };

        let output = output.inspect_err(|e: &FilterError| {
            debug!("Filter {} failed: {}", spec, e);
        })?;

        let stats = ExecutionStats {
            filter: *spec,
            width: output.width(),
            height: output.height(),
            duration_ms: start.elapsed().as_millis() as u64,
            parallel: parallelism.is_parallel(),
        };
        info!(
            "Applied {} to {}x{} image in {}ms",
            spec, stats.width, stats.height, stats.duration_ms
        );

        Ok(ExecutionResult { image: output, stats })
    }
}

impl Default for ExecutionEngine {
    fn default() -> Self {
        Self::new(ProcessingConfig::default())
    }
}
