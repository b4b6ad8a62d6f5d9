//! Pixel buffer and value types shared by every filter.
//!
//! The pixel buffer is [`image::RgbImage`]: a row-major grid of interleaved
//! 8-bit red, green and blue samples. Filters borrow the source buffer and
//! always allocate a fresh result of the same dimensions.

use crate::core::error::{FilterError, FilterResult};
use image::{DynamicImage, Rgb, RgbImage};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Channels per pixel in the pixel buffer.
pub const CHANNELS: usize = 3;

/// The pixel buffer every filter reads and produces.
pub type PixelBuffer = RgbImage;

/// How a filter sweeps the pixel grid.
///
/// `Sequential` is the reference. `Parallel` splits the output into
/// disjoint rows (or bands of block rows) and must produce identical bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Parallelism {
    #[default]
    /// Rows one after another on the calling thread.
    Sequential,
    /// Disjoint rows or bands on the rayon pool.
    Parallel,
}

impl Parallelism {
    /// Map a boolean flag onto a sweep strategy.
    pub fn from_flag(parallel: bool) -> Self {
        if parallel {
            Parallelism::Parallel
        } else {
            Parallelism::Sequential
        }
    }

    /// Whether this is [`Parallelism::Parallel`].
    pub fn is_parallel(&self) -> bool {
        matches!(self, Parallelism::Parallel)
    }
}

/// Raw parameter values as they arrive from the driver boundary.
///
/// Only the two shapes the filters need are represented; typed parameters
/// are built from these by [`crate::filters::dispatch::FilterSpec::from_parameters`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// 64-bit signed integer
    Integer(i64),
    /// UTF-8 string (enumerated identifiers)
    String(String),
}

impl Value {
    /// Get the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "integer",
            Value::String(_) => "string",
        }
    }

    /// The integer, if this is one.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(v) => Some(*v),
            Value::String(_) => None,
        }
    }

    /// The string, if this is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            Value::Integer(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(v) => write!(f, "{}", v),
            Value::String(s) => write!(f, "\"{}\"", s),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(v as i64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

/// Normalize a decoded image to opaque RGB.
///
/// Images carrying alpha are composited over `background`; others are
/// converted directly.
pub fn flatten_to_rgb(image: &DynamicImage, background: Rgb<u8>) -> PixelBuffer {
    if !image.color().has_alpha() {
        return image.to_rgb8();
    }

    let rgba = image.to_rgba8();
    RgbImage::from_fn(rgba.width(), rgba.height(), |x, y| {
        let [r, g, b, a] = rgba.get_pixel(x, y).0;
        let blend = |c: u8, bg: u8| -> u8 {
            let a = a as u32;
            let mixed = c as u32 * a + bg as u32 * (255 - a);
            ((mixed + 127) / 255) as u8
        };
        Rgb([
            blend(r, background[0]),
            blend(g, background[1]),
            blend(b, background[2]),
        ])
    })
}

/// Check that a filter kept the source dimensions.
pub fn ensure_same_dimensions(source: &PixelBuffer, result: &PixelBuffer) -> FilterResult<()> {
    if source.dimensions() != result.dimensions() {
        return Err(FilterError::DimensionMismatch {
            expected: source.dimensions(),
            got: result.dimensions(),
        });
    }
    Ok(())
}
