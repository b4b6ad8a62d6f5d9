//! Core types and infrastructure shared by every filter.
//!
//! This module contains:
//! - The pixel buffer and raw parameter values
//! - Parameter definitions and constraints
//! - Row and block sweeps (sequential or parallel)
//! - Processing configuration
//! - Error types

pub mod types;
pub mod parameter;
pub mod sweep;
pub mod config;
pub mod error;

// Re-export commonly used types
pub use types::{Parallelism, PixelBuffer, Value};
pub use parameter::{Constraint, ParameterDefinition, ParameterSet};
pub use config::ProcessingConfig;
pub use error::{FilterError, RasterError};
