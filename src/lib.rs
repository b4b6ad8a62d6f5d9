//! # Rasterkit - Deterministic Raster Filters
//!
//! Rasterkit maps one in-memory RGB bitmap to another with a small set of
//! pure, exactly specified filters.
//!
//! ## Features
//!
//! - **Mosaic**: block-wise averaging with floor division
//! - **Grayscale**: average or weighted luminance
//! - **High Contrast**: grayscale followed by a two-level threshold
//! - **Negative**: channel complement
//! - **RGB Channel**: keep one channel, zero the others
//! - **Brightness**: saturating per-channel shift
//!
//! Every filter allocates a fresh result of the same size and never touches
//! its source. Sequential and parallel sweeps produce identical bytes.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rasterkit::prelude::*;
//!
//! let registry = FilterRegistry::with_builtins();
//! let params = ParameterSet::new().with("block_size", 8);
//! let spec = FilterSpec::from_parameters(&registry, "mosaic", &params)?;
//!
//! let image = load_image("input.png", image::Rgb([255, 255, 255]))?;
//! let engine = ExecutionEngine::new(ProcessingConfig::default());
//! let result = engine.execute(&spec, &image)?;
//! save_image(&result.image, "input_mosaic.png")?;
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: pixel buffer, parameters, sweeps, configuration and errors
//! - [`filters`]: filter implementations, registry and dispatch
//! - [`execution`]: engine running a filter under a configuration
//! - [`io`]: decoding and encoding image files

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod core;
pub mod execution;
pub mod filters;
pub mod io;

/// Prelude module for convenient imports.
///
/// Import everything commonly needed with:
/// ```rust,ignore
/// use rasterkit::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use crate::core::types::{flatten_to_rgb, Parallelism, PixelBuffer, Value};
    pub use crate::core::parameter::{Constraint, ParamType, ParameterDefinition, ParameterSet};
    pub use crate::core::config::ProcessingConfig;

    // Errors
    pub use crate::core::error::{FilterError, FilterResult, RasterError, RasterResult};

    // Filters
    pub use crate::filters::params::{BlockSize, Channel, Delta, GrayMethod, Threshold};
    pub use crate::filters::{
        brightness, channel_isolate, grayscale, high_contrast, mosaic, negative,
    };
    pub use crate::filters::dispatch::FilterSpec;
    pub use crate::filters::registry::{FilterMetadata, FilterRegistry};

    // Execution
    pub use crate::execution::engine::{ExecutionEngine, ExecutionResult, ExecutionStats};

    // I/O
    pub use crate::io::{load_image, save_image, suggested_output_path};
}

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use image::Rgb;

    #[test]
    fn test_version() {
        assert!(!super::VERSION.is_empty());
        assert_eq!(super::NAME, "rasterkit");
    }

    #[test]
    fn test_registry_with_builtins() {
        let registry = FilterRegistry::with_builtins();

        assert!(registry.contains("mosaic"));
        assert!(registry.contains("grayscale"));
        assert!(registry.contains("high_contrast"));
        assert!(registry.contains("negative"));
        assert!(registry.contains("channel_isolate"));
        assert!(registry.contains("brightness"));
    }

    #[test]
    fn test_dispatch_matches_direct_call() {
        let image = PixelBuffer::from_fn(6, 6, |x, y| Rgb([(x * 40) as u8, (y * 40) as u8, 10]));
        let registry = FilterRegistry::with_builtins();
        let spec = FilterSpec::from_parameters(
            &registry,
            "mosaic",
            &ParameterSet::new().with("block_size", 4),
        )
        .unwrap();

        let via_dispatch = spec.apply(&image, Parallelism::Parallel).unwrap();
        let direct = mosaic(&image, BlockSize::try_from(4i64).unwrap());
        assert_eq!(via_dispatch, direct);
    }
}
