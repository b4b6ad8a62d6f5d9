//! Filter dispatch.
//!
//! [`FilterSpec`] is the single point where a filter selection and its
//! validated parameters meet the filter implementations. Each variant
//! carries only typed, in-range parameters; raw driver input goes through
//! [`FilterSpec::from_parameters`] first.

use crate::core::error::{FilterError, FilterResult};
use crate::core::parameter::ParameterSet;
use crate::core::types::{ensure_same_dimensions, Parallelism, PixelBuffer, Value};
use crate::filters::color::{brightness_with, channel_isolate_with, negative_with};
use crate::filters::contrast::high_contrast_with;
use crate::filters::grayscale::grayscale_with;
use crate::filters::mosaic::mosaic_with;
use crate::filters::params::{BlockSize, Channel, Delta, GrayMethod, Threshold};
use crate::filters::registry::{FilterMetadata, FilterRegistry};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A filter selection with its validated parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "filter", rename_all = "snake_case")]
pub enum FilterSpec {
    /// Block averaging.
    Mosaic {
        /// Block edge length.
        block_size: BlockSize,
    },
    /// Gray level conversion.
    Grayscale {
        /// Gray level policy.
        method: GrayMethod,
    },
    /// Grayscale followed by a black/white threshold.
    HighContrast {
        /// Gray level policy.
        method: GrayMethod,
        /// Levels at or above this become white.
        threshold: Threshold,
    },
    /// Channel complement.
    Negative,
    /// Keep one channel, zero the others.
    ChannelIsolate {
        /// Channel to keep.
        channel: Channel,
    },
    /// Saturating shift of every channel.
    Brightness {
        /// Amount added.
        delta: Delta,
    },
}

impl FilterSpec {
    /// Registry identifier of this filter.
    pub fn id(&self) -> &'static str {
        match self {
            FilterSpec::Mosaic { .. } => "mosaic",
            FilterSpec::Grayscale { .. } => "grayscale",
            FilterSpec::HighContrast { .. } => "high_contrast",
            FilterSpec::Negative => "negative",
            FilterSpec::ChannelIsolate { .. } => "channel_isolate",
            FilterSpec::Brightness { .. } => "brightness",
        }
    }

    /// Build a spec from raw parameters, validating them against the
    /// registry's definitions. Omitted parameters take their defaults;
    /// parameters the filter does not declare are rejected.
    pub fn from_parameters(
        registry: &FilterRegistry,
        id: &str,
        params: &ParameterSet,
    ) -> FilterResult<Self> {
        let metadata = registry
            .get_metadata(id)
            .ok_or_else(|| FilterError::UnknownFilter(id.to_string()))?;

        if let Some(unknown) = params.names().find(|n| metadata.parameter(n).is_none()) {
            return Err(FilterError::invalid(id, unknown, "not a parameter of this filter"));
        }

        let resolved = Resolved { metadata, params };
        let spec = match id {
            "mosaic" => FilterSpec::Mosaic {
                block_size: BlockSize::try_from(resolved.integer("block_size")?)?,
            },
            "grayscale" => FilterSpec::Grayscale {
                method: GrayMethod::parse(id, resolved.choice("method")?)?,
            },
            "high_contrast" => FilterSpec::HighContrast {
                method: GrayMethod::parse(id, resolved.choice("method")?)?,
                threshold: Threshold::try_from(resolved.integer("threshold")?)?,
            },
            "negative" => FilterSpec::Negative,
            "channel_isolate" => FilterSpec::ChannelIsolate {
                channel: Channel::parse(resolved.choice("channel")?)?,
            },
            "brightness" => FilterSpec::Brightness {
                delta: Delta::try_from(resolved.integer("delta")?)?,
            },
            other => return Err(FilterError::UnknownFilter(other.to_string())),
        };

        debug!("Resolved filter spec {:?}", spec);
        Ok(spec)
    }

    /// Run the filter on `image`, producing a new image of the same size.
    pub fn apply(&self, image: &PixelBuffer, parallelism: Parallelism) -> FilterResult<PixelBuffer> {
        debug!(
            "Applying {} to {}x{} image ({:?})",
            self,
            image.width(),
            image.height(),
            parallelism
        );

        let result = match *self {
            FilterSpec::Mosaic { block_size } => mosaic_with(image, block_size, parallelism),
            FilterSpec::Grayscale { method } => grayscale_with(image, method, parallelism),
            FilterSpec::HighContrast { method, threshold } => {
                high_contrast_with(image, method, threshold, parallelism)
            }
            FilterSpec::Negative => negative_with(image, parallelism),
            FilterSpec::ChannelIsolate { channel } => {
                channel_isolate_with(image, channel, parallelism)
            }
            FilterSpec::Brightness { delta } => brightness_with(image, delta, parallelism),
        };

        ensure_same_dimensions(image, &result)?;
        Ok(result)
    }

    /// File name suggested for saving the result of this filter.
    pub fn suggested_file_name(&self, input_stem: &str) -> String {
        format!("{}_{}.png", input_stem, self.id())
    }
}

impl fmt::Display for FilterSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterSpec::Mosaic { block_size } => write!(f, "mosaic(block_size={})", block_size.get()),
            FilterSpec::Grayscale { method } => write!(f, "grayscale(method={})", method),
            FilterSpec::HighContrast { method, threshold } => write!(
                f,
                "high_contrast(method={}, threshold={})",
                method,
                threshold.get()
            ),
            FilterSpec::Negative => write!(f, "negative"),
            FilterSpec::ChannelIsolate { channel } => write!(f, "channel_isolate(channel={})", channel),
            FilterSpec::Brightness { delta } => write!(f, "brightness(delta={})", delta.get()),
        }
    }
}

/// Raw parameters paired with the definitions that validate them.
struct Resolved<'a> {
    metadata: &'a FilterMetadata,
    params: &'a ParameterSet,
}

impl Resolved<'_> {
    /// Provided value (or the declared default), checked against the definition.
    fn value(&self, name: &str) -> FilterResult<&Value> {
        let definition = self
            .metadata
            .parameter(name)
            .ok_or_else(|| FilterError::invalid(&self.metadata.id, name, "undeclared parameter"))?;
        let value = self.params.get(name).unwrap_or(&definition.default_value);
        definition
            .validate(value)
            .map_err(|reason| FilterError::invalid(&self.metadata.id, name, reason))?;
        Ok(value)
    }

    fn integer(&self, name: &str) -> FilterResult<i64> {
        self.value(name)?
            .as_integer()
            .ok_or_else(|| FilterError::invalid(&self.metadata.id, name, "expected an integer"))
    }

    fn choice(&self, name: &str) -> FilterResult<&str> {
        self.value(name)?
            .as_str()
            .ok_or_else(|| FilterError::invalid(&self.metadata.id, name, "expected an identifier"))
    }
}
