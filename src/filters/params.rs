//! Validated filter parameters.
//!
//! Every type here can only hold an in-range value, so filter bodies never
//! have to re-check their inputs.

use crate::core::error::FilterError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Edge length of a mosaic block, in pixels. Always within `1..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct BlockSize(u32);

impl BlockSize {
    /// Smallest accepted size.
    pub const MIN: u32 = 1;
    /// Largest accepted size.
    pub const MAX: u32 = 100;
    /// Size used when none is given.
    pub const DEFAULT: u32 = 10;

    /// Size in pixels.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<i64> for BlockSize {
    type Error = FilterError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&value) {
            Ok(BlockSize(value as u32))
        } else {
            Err(FilterError::invalid(
                "mosaic",
                "block_size",
                format!("{} is outside [{}, {}]", value, Self::MIN, Self::MAX),
            ))
        }
    }
}

impl From<BlockSize> for i64 {
    fn from(size: BlockSize) -> Self {
        size.0 as i64
    }
}

/// Gray level at and above which high contrast outputs white.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Threshold(u8);

impl Threshold {
    /// Threshold used when none is given.
    pub const DEFAULT: u8 = 128;

    /// Every `u8` is a valid threshold.
    pub fn new(value: u8) -> Self {
        Threshold(value)
    }

    /// Threshold level.
    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Threshold {
    type Error = FilterError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value).map(Threshold).map_err(|_| {
            FilterError::invalid(
                "high_contrast",
                "threshold",
                format!("{} is outside [0, 255]", value),
            )
        })
    }
}

impl From<Threshold> for i64 {
    fn from(threshold: Threshold) -> Self {
        threshold.0 as i64
    }
}

/// Amount added to every channel by the brightness filter. Within `-255..=255`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Delta(i16);

impl Delta {
    /// Largest darkening shift.
    pub const MIN: i16 = -255;
    /// Largest brightening shift.
    pub const MAX: i16 = 255;
    /// No change.
    pub const ZERO: Delta = Delta(0);

    /// Shift amount.
    pub fn get(self) -> i16 {
        self.0
    }
}

impl TryFrom<i64> for Delta {
    type Error = FilterError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&value) {
            Ok(Delta(value as i16))
        } else {
            Err(FilterError::invalid(
                "brightness",
                "delta",
                format!("{} is outside [{}, {}]", value, Self::MIN, Self::MAX),
            ))
        }
    }
}

impl From<Delta> for i64 {
    fn from(delta: Delta) -> Self {
        delta.0 as i64
    }
}

/// How a pixel is reduced to a single gray level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrayMethod {
    /// floor((r + g + b) / 3)
    Average,
    /// floor(0.3 r + 0.7 g + 0.1 b)
    Weighted,
}

impl GrayMethod {
    /// Accepted identifiers.
    pub const NAMES: [&'static str; 2] = ["average", "weighted"];

    /// Identifier of this method.
    pub fn as_str(&self) -> &'static str {
        match self {
            GrayMethod::Average => "average",
            GrayMethod::Weighted => "weighted",
        }
    }

    /// Parse an identifier, attributing failures to `filter`.
    pub fn parse(filter: &str, name: &str) -> Result<Self, FilterError> {
        match name {
            "average" => Ok(GrayMethod::Average),
            "weighted" => Ok(GrayMethod::Weighted),
            other => Err(FilterError::invalid(
                filter,
                "method",
                format!("unknown method '{}', expected one of {:?}", other, Self::NAMES),
            )),
        }
    }
}

impl fmt::Display for GrayMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Color channel kept by channel isolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    /// First channel.
    Red,
    /// Second channel.
    Green,
    /// Third channel.
    Blue,
}

impl Channel {
    /// Accepted identifiers.
    pub const NAMES: [&'static str; 3] = ["red", "green", "blue"];

    /// Position of this channel within an RGB triple.
    pub fn index(&self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }

    /// Identifier of this channel.
    pub fn as_str(&self) -> &'static str {
        Self::NAMES[self.index()]
    }

    /// Parse an identifier. Unknown channels are rejected, never passed through.
    pub fn parse(name: &str) -> Result<Self, FilterError> {
        match name {
            "red" => Ok(Channel::Red),
            "green" => Ok(Channel::Green),
            "blue" => Ok(Channel::Blue),
            other => Err(FilterError::invalid(
                "channel_isolate",
                "channel",
                format!("unknown channel '{}', expected one of {:?}", other, Self::NAMES),
            )),
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
