//! Grayscale conversion.

use crate::core::sweep::map_pixels;
use crate::core::types::{Parallelism, PixelBuffer};
use crate::filters::params::GrayMethod;

/// Gray level of a single pixel.
///
/// The weighted policy uses exact integer arithmetic for
/// `floor(0.3 r + 0.7 g + 0.1 b)`. Its weights sum to 1.1, so bright pixels
/// can exceed 255; those saturate at 255.
pub fn gray_level(method: GrayMethod, [r, g, b]: [u8; 3]) -> u8 {
    let (r, g, b) = (r as u32, g as u32, b as u32);
    match method {
        GrayMethod::Average => ((r + g + b) / 3) as u8,
        GrayMethod::Weighted => ((3 * r + 7 * g + b) / 10).min(255) as u8,
    }
}

/// Convert to grayscale with the reference sequential sweep.
pub fn grayscale(image: &PixelBuffer, method: GrayMethod) -> PixelBuffer {
    grayscale_with(image, method, Parallelism::Sequential)
}

/// Convert to grayscale. Every output pixel is `(gray, gray, gray)`.
pub fn grayscale_with(
    image: &PixelBuffer,
    method: GrayMethod,
    parallelism: Parallelism,
) -> PixelBuffer {
    map_pixels(image, parallelism, |px| {
        let gray = gray_level(method, px);
        [gray, gray, gray]
    })
}
