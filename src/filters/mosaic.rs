//! Mosaic (block averaging) filter.
//!
//! The image is tiled with `block_size × block_size` blocks starting at the
//! origin; blocks on the right and bottom edges are cut at the image bounds.
//! Each block is replaced by the floor of its per-channel mean.

use crate::core::sweep::{for_each_band, BlockIterator, BlockRegion};
use crate::core::types::{Parallelism, PixelBuffer, CHANNELS};
use crate::filters::params::BlockSize;

/// Apply the mosaic filter with the reference sequential sweep.
pub fn mosaic(image: &PixelBuffer, block_size: BlockSize) -> PixelBuffer {
    mosaic_with(image, block_size, Parallelism::Sequential)
}

/// Apply the mosaic filter. Parallel sweeps process one band of block rows
/// per task.
pub fn mosaic_with(
    image: &PixelBuffer,
    block_size: BlockSize,
    parallelism: Parallelism,
) -> PixelBuffer {
    let (width, height) = image.dimensions();
    let size = block_size.get();
    let source: &[u8] = image.as_raw();
    let stride = width as usize * CHANNELS;

    for_each_band(width, height, size, parallelism, |band_y, band| {
        let band_height = (band.len() / stride) as u32;
        for block in BlockIterator::new(width, band_height, size) {
            let average = block_average(source, stride, band_y, &block);
            for row in block.y..block.bottom() {
                let start = row as usize * stride + block.x as usize * CHANNELS;
                let end = start + block.width as usize * CHANNELS;
                for px in band[start..end].chunks_exact_mut(CHANNELS) {
                    px.copy_from_slice(&average);
                }
            }
        }
    })
}

/// Floor of the per-channel mean over `block`, whose rows are relative to
/// `band_y` in the source.
fn block_average(source: &[u8], stride: usize, band_y: u32, block: &BlockRegion) -> [u8; 3] {
    let mut sums = [0u64; 3];
    for row in block.y..block.bottom() {
        let start = (band_y + row) as usize * stride + block.x as usize * CHANNELS;
        let end = start + block.width as usize * CHANNELS;
        for px in source[start..end].chunks_exact(CHANNELS) {
            sums[0] += px[0] as u64;
            sums[1] += px[1] as u64;
            sums[2] += px[2] as u64;
        }
    }

    let count = block.area();
    [
        (sums[0] / count) as u8,
        (sums[1] / count) as u8,
        (sums[2] / count) as u8,
    ]
}
