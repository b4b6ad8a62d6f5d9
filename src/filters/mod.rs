//! Filter module.
//!
//! Contains the filter implementations, their validated parameters, the
//! registry catalogue and the dispatch enum tying them together.

pub mod params;
pub mod mosaic;
pub mod grayscale;
pub mod contrast;
pub mod color;
pub mod registry;
pub mod dispatch;

pub use color::{brightness, channel_isolate, negative};
pub use contrast::high_contrast;
pub use dispatch::FilterSpec;
pub use grayscale::grayscale;
pub use mosaic::mosaic;
pub use registry::{FilterMetadata, FilterRegistry};
