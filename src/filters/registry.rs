//! Filter registry: the catalogue of available filters and their parameters.

use crate::core::parameter::ParameterDefinition;
use crate::filters::params::{BlockSize, Channel, Delta, GrayMethod, Threshold};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Metadata describing a filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterMetadata {
    /// Unique identifier (e.g., "high_contrast")
    pub id: String,
    /// Human-readable name (e.g., "High Contrast")
    pub name: String,
    /// Detailed description
    pub description: String,
    /// Parameter definitions, in the order they are documented
    pub parameters: Vec<ParameterDefinition>,
}

impl FilterMetadata {
    /// Start building metadata for a filter.
    pub fn builder(id: impl Into<String>, name: impl Into<String>) -> FilterMetadataBuilder {
        FilterMetadataBuilder {
            metadata: FilterMetadata {
                id: id.into(),
                name: name.into(),
                description: String::new(),
                parameters: Vec::new(),
            },
        }
    }

    /// Look up a parameter definition by name.
    pub fn parameter(&self, name: &str) -> Option<&ParameterDefinition> {
        self.parameters.iter().find(|p| p.name == name)
    }
}

/// Builder for [`FilterMetadata`].
pub struct FilterMetadataBuilder {
    metadata: FilterMetadata,
}

impl FilterMetadataBuilder {
    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.metadata.description = description.into();
        self
    }

    /// Add a parameter definition.
    pub fn parameter(mut self, parameter: ParameterDefinition) -> Self {
        self.metadata.parameters.push(parameter);
        self
    }

    /// Finish building.
    pub fn build(self) -> FilterMetadata {
        self.metadata
    }
}

/// Registry of all available filters, in registration order.
#[derive(Debug, Clone, Default)]
pub struct FilterRegistry {
    filters: IndexMap<String, FilterMetadata>,
}

impl FilterRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry pre-populated with the built-in filters.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for metadata in builtin_metadata() {
            registry.register(metadata);
        }
        registry
    }

    /// Register a filter. An existing entry with the same id is replaced.
    pub fn register(&mut self, metadata: FilterMetadata) {
        self.filters.insert(metadata.id.clone(), metadata);
    }

    /// Get metadata for a filter.
    pub fn get_metadata(&self, id: &str) -> Option<&FilterMetadata> {
        self.filters.get(id)
    }

    /// Check if a filter is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.filters.contains_key(id)
    }

    /// Get all registered filter IDs.
    pub fn filter_ids(&self) -> impl Iterator<Item = &str> {
        self.filters.keys().map(|s| s.as_str())
    }

    /// Get all registered filters.
    pub fn filters(&self) -> impl Iterator<Item = &FilterMetadata> {
        self.filters.values()
    }

    /// Search filters by id, name or description.
    pub fn search(&self, query: &str) -> Vec<&str> {
        let query = query.to_lowercase();

        self.filters
            .values()
            .filter(|m| {
                m.id.to_lowercase().contains(&query)
                    || m.name.to_lowercase().contains(&query)
                    || m.description.to_lowercase().contains(&query)
            })
            .map(|m| m.id.as_str())
            .collect()
    }

    /// Get the total number of registered filters.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

/// Metadata for the six built-in filters.
///
/// Defaults mirror the interactive front end: block size 10, average
/// method, threshold 128, red channel, no brightness change.
pub fn builtin_metadata() -> Vec<FilterMetadata> {
    let method = || {
        ParameterDefinition::choice("method", GrayMethod::Average.as_str(), &GrayMethod::NAMES)
            .with_description("Luminance policy: average = (r+g+b)/3, weighted = 0.3r+0.7g+0.1b")
    };

    vec![
        FilterMetadata::builder("mosaic", "Mosaic")
            .description("Replace each block with the average color of its pixels")
            .parameter(
                ParameterDefinition::integer(
                    "block_size",
                    BlockSize::DEFAULT as i64,
                    BlockSize::MIN as i64,
                    BlockSize::MAX as i64,
                )
                .with_description("Block edge length in pixels"),
            )
            .build(),
        FilterMetadata::builder("grayscale", "Grayscale")
            .description("Reduce every pixel to a single gray level")
            .parameter(method())
            .build(),
        FilterMetadata::builder("high_contrast", "High Contrast")
            .description("Gray levels below the threshold become black, the rest white")
            .parameter(method())
            .parameter(
                ParameterDefinition::integer("threshold", Threshold::DEFAULT as i64, 0, 255)
                    .with_description("Lowest gray level rendered white"),
            )
            .build(),
        FilterMetadata::builder("negative", "Negative")
            .description("Invert every color channel")
            .build(),
        FilterMetadata::builder("channel_isolate", "RGB Channel")
            .description("Keep one color channel and zero the other two")
            .parameter(
                ParameterDefinition::choice("channel", Channel::Red.as_str(), &Channel::NAMES)
                    .with_description("Channel to keep"),
            )
            .build(),
        FilterMetadata::builder("brightness", "Brightness")
            .description("Add a constant to every channel, saturating at 0 and 255")
            .parameter(
                ParameterDefinition::integer("delta", 0, Delta::MIN as i64, Delta::MAX as i64)
                    .with_description("Amount added to each channel"),
            )
            .build(),
    ]
}
