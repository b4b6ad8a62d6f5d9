//! High contrast (two-level threshold) filter.

use crate::core::sweep::map_pixels;
use crate::core::types::{Parallelism, PixelBuffer};
use crate::filters::grayscale::grayscale_with;
use crate::filters::params::{GrayMethod, Threshold};

const BLACK: [u8; 3] = [0, 0, 0];
const WHITE: [u8; 3] = [255, 255, 255];

/// Threshold a grayscale rendering with the reference sequential sweep.
pub fn high_contrast(image: &PixelBuffer, method: GrayMethod, threshold: Threshold) -> PixelBuffer {
    high_contrast_with(image, method, threshold, Parallelism::Sequential)
}

/// Convert to grayscale with `method`, then map gray levels below
/// `threshold` to black and all others to white.
pub fn high_contrast_with(
    image: &PixelBuffer,
    method: GrayMethod,
    threshold: Threshold,
    parallelism: Parallelism,
) -> PixelBuffer {
    let gray = grayscale_with(image, method, parallelism);
    let threshold = threshold.get();
    map_pixels(&gray, parallelism, |[level, _, _]| {
        if level < threshold {
            BLACK
        } else {
            WHITE
        }
    })
}
