//! Error types for Rasterkit.
//!
//! Uses thiserror for structured errors with context. Errors are designed to:
//! - Name the filter and parameter that was rejected
//! - Separate caller mistakes (bad parameters) from implementation bugs
//! - Convert into the top-level [`RasterError`] with `?`

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Top-level error type for Rasterkit.
///
/// This enum encompasses all error categories and enables automatic
/// conversion between specific error types.
#[derive(Error, Debug)]
pub enum RasterError {
    /// Parameter validation or filter execution failed.
    #[error("Filter error: {0}")]
    Filter(#[from] FilterError),

    /// File system access failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Decoding or encoding an image failed.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// A configuration file could not be parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    /// A run report could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Anything else.
    #[error("{0}")]
    Other(String),
}

/// Errors raised while validating parameters or running a filter.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterError {
    /// A parameter violates its constraint. Raised before any pixel is touched.
    #[error("Invalid parameter '{parameter}' for filter '{filter}': {reason}")]
    InvalidParameter {
        /// Filter the parameter belongs to.
        filter: String,
        /// Rejected parameter.
        parameter: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// No filter is registered under this name.
    #[error("Unknown filter '{0}'")]
    UnknownFilter(String),

    /// A filter produced an image whose size differs from its input.
    /// Never expected from a correct implementation.
    #[error("Dimension mismatch: expected {expected:?}, got {got:?}")]
    DimensionMismatch {
        /// Input dimensions.
        expected: (u32, u32),
        /// Output dimensions.
        got: (u32, u32),
    },
}

impl FilterError {
    /// Shorthand for building an [`FilterError::InvalidParameter`].
    pub fn invalid(
        filter: impl Into<String>,
        parameter: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        FilterError::InvalidParameter {
            filter: filter.into(),
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }

    /// Whether the caller can fix this error by changing its request.
    pub fn is_caller_error(&self) -> bool {
        !matches!(self, FilterError::DimensionMismatch { .. })
    }

    /// Get suggestion for fixing this error.
    pub fn suggested_fix(&self) -> Option<String> {
        match self {
            FilterError::InvalidParameter { filter, parameter, .. } => Some(format!(
                "Run 'rasterkit info {}' to see the accepted values for '{}'",
                filter, parameter
            )),
            FilterError::UnknownFilter(_) => {
                Some("Run 'rasterkit list' to see available filters".to_string())
            }
            FilterError::DimensionMismatch { .. } => None,
        }
    }
}

/// Result type alias for Rasterkit operations.
pub type RasterResult<T> = Result<T, RasterError>;

/// Result type alias for filter operations.
pub type FilterResult<T> = Result<T, FilterError>;
