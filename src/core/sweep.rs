//! Row and block sweeps over the pixel buffer.
//!
//! Every filter writes into a freshly allocated result. The result is split
//! into disjoint mutable slices (single rows, or bands of rows for block
//! filters) so the same per-slice code runs either sequentially or on the
//! rayon pool without coordination.

use crate::core::types::{Parallelism, PixelBuffer, CHANNELS};
use rayon::prelude::*;

/// A rectangular region of the pixel grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockRegion {
    /// X offset from the image origin
    pub x: u32,
    /// Y offset from the image origin
    pub y: u32,
    /// Width of the region
    pub width: u32,
    /// Height of the region
    pub height: u32,
}

impl BlockRegion {
    /// Create a new block region.
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Get the bottom edge coordinate (exclusive).
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    /// Number of pixels covered.
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

/// Iterator over square blocks covering an image, row-major from (0, 0).
///
/// Blocks on the right and bottom edges are truncated to the image bounds.
pub struct BlockIterator {
    image_width: u32,
    image_height: u32,
    block_size: u32,
    current_x: u32,
    current_y: u32,
}

impl BlockIterator {
    /// Create a new block iterator. `block_size` must be non-zero.
    pub fn new(image_width: u32, image_height: u32, block_size: u32) -> Self {
        debug_assert!(block_size > 0);
        Self {
            image_width,
            image_height,
            block_size,
            current_x: 0,
            current_y: 0,
        }
    }

    /// Get the total number of blocks.
    pub fn block_count(&self) -> usize {
        let blocks_x = self.image_width.div_ceil(self.block_size);
        let blocks_y = self.image_height.div_ceil(self.block_size);
        blocks_x as usize * blocks_y as usize
    }
}

impl Iterator for BlockIterator {
    type Item = BlockRegion;

    fn next(&mut self) -> Option<Self::Item> {
        if self.image_width == 0 || self.current_y >= self.image_height {
            return None;
        }

        let x = self.current_x;
        let y = self.current_y;
        let width = self.block_size.min(self.image_width - x);
        let height = self.block_size.min(self.image_height - y);

        self.current_x += self.block_size;
        if self.current_x >= self.image_width {
            self.current_x = 0;
            self.current_y += self.block_size;
        }

        Some(BlockRegion::new(x, y, width, height))
    }
}

/// Build a new buffer by mapping every source pixel independently.
pub fn map_pixels<F>(source: &PixelBuffer, parallelism: Parallelism, f: F) -> PixelBuffer
where
    F: Fn([u8; 3]) -> [u8; 3] + Send + Sync,
{
    let (width, height) = source.dimensions();
    let mut result = PixelBuffer::new(width, height);
    let row_len = width as usize * CHANNELS;
    if row_len == 0 || height == 0 {
        return result;
    }

    let map_row = |(dst, src): (&mut [u8], &[u8])| {
        for (out, px) in dst
            .chunks_exact_mut(CHANNELS)
            .zip(src.chunks_exact(CHANNELS))
        {
            out.copy_from_slice(&f([px[0], px[1], px[2]]));
        }
    };

    let src: &[u8] = source.as_raw();
    let dst: &mut [u8] = &mut result;
    match parallelism {
        Parallelism::Sequential => dst.chunks_mut(row_len).zip(src.chunks(row_len)).for_each(map_row),
        Parallelism::Parallel => dst
            .par_chunks_mut(row_len)
            .zip(src.par_chunks(row_len))
            .for_each(map_row),
    }

    result
}

/// Allocate a result buffer and hand out bands of `band_rows` rows each.
///
/// The callback receives the band's first row and its mutable bytes. The
/// last band may be shorter.
pub fn for_each_band<F>(
    width: u32,
    height: u32,
    band_rows: u32,
    parallelism: Parallelism,
    f: F,
) -> PixelBuffer
where
    F: Fn(u32, &mut [u8]) + Send + Sync,
{
    let mut result = PixelBuffer::new(width, height);
    let band_len = width as usize * band_rows as usize * CHANNELS;
    if band_len == 0 || height == 0 {
        return result;
    }

    let fill_band = |(index, band): (usize, &mut [u8])| {
        f(index as u32 * band_rows, band);
    };

    let dst: &mut [u8] = &mut result;
    match parallelism {
        Parallelism::Sequential => dst.chunks_mut(band_len).enumerate().for_each(fill_band),
        Parallelism::Parallel => dst.par_chunks_mut(band_len).enumerate().for_each(fill_band),
    }

    result
}
