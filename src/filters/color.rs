//! Per-channel color filters: negative, channel isolation and brightness.

use crate::core::sweep::map_pixels;
use crate::core::types::{Parallelism, PixelBuffer};
use crate::filters::params::{Channel, Delta};

/// Invert every channel with the reference sequential sweep.
pub fn negative(image: &PixelBuffer) -> PixelBuffer {
    negative_with(image, Parallelism::Sequential)
}

/// Invert every channel: `255 - c`. Applying it twice is the identity.
pub fn negative_with(image: &PixelBuffer, parallelism: Parallelism) -> PixelBuffer {
    map_pixels(image, parallelism, |[r, g, b]| [255 - r, 255 - g, 255 - b])
}

/// Keep one channel with the reference sequential sweep.
pub fn channel_isolate(image: &PixelBuffer, channel: Channel) -> PixelBuffer {
    channel_isolate_with(image, channel, Parallelism::Sequential)
}

/// Keep `channel` and zero the other two.
pub fn channel_isolate_with(
    image: &PixelBuffer,
    channel: Channel,
    parallelism: Parallelism,
) -> PixelBuffer {
    let index = channel.index();
    map_pixels(image, parallelism, |px| {
        let mut out = [0u8; 3];
        out[index] = px[index];
        out
    })
}

/// Shift brightness with the reference sequential sweep.
pub fn brightness(image: &PixelBuffer, delta: Delta) -> PixelBuffer {
    brightness_with(image, delta, Parallelism::Sequential)
}

/// Add `delta` to every channel, saturating at 0 and 255.
pub fn brightness_with(image: &PixelBuffer, delta: Delta, parallelism: Parallelism) -> PixelBuffer {
    let delta = delta.get();
    let shift = |c: u8| -> u8 { (c as i16 + delta).clamp(0, 255) as u8 };
    map_pixels(image, parallelism, |[r, g, b]| [shift(r), shift(g), shift(b)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn sample() -> PixelBuffer {
        PixelBuffer::from_fn(9, 5, |x, y| Rgb([(x * 28) as u8, (y * 60) as u8, (x * y * 6) as u8]))
    }

    fn delta(n: i64) -> Delta {
        Delta::try_from(n).unwrap()
    }

    #[test]
    fn test_negative_values() {
        let image = PixelBuffer::from_pixel(1, 1, Rgb([0, 100, 255]));
        assert_eq!(*negative(&image).get_pixel(0, 0), Rgb([255, 155, 0]));
    }

    #[test]
    fn test_negative_involution() {
        let image = sample();
        assert_eq!(negative(&negative(&image)), image);
    }

    #[test]
    fn test_channel_isolation() {
        let image = PixelBuffer::from_pixel(1, 1, Rgb([10, 20, 30]));
        assert_eq!(*channel_isolate(&image, Channel::Red).get_pixel(0, 0), Rgb([10, 0, 0]));
        assert_eq!(*channel_isolate(&image, Channel::Green).get_pixel(0, 0), Rgb([0, 20, 0]));
        assert_eq!(*channel_isolate(&image, Channel::Blue).get_pixel(0, 0), Rgb([0, 0, 30]));
    }

    #[test]
    fn test_red_isolation_zeroes_others() {
        let image = sample();
        let result = channel_isolate_with(&image, Channel::Red, Parallelism::Parallel);
        for (out, src) in result.pixels().zip(image.pixels()) {
            assert_eq!(out[0], src[0]);
            assert_eq!(out[1], 0);
            assert_eq!(out[2], 0);
        }
    }

    #[test]
    fn test_brightness_identity() {
        let image = sample();
        assert_eq!(brightness(&image, Delta::ZERO), image);
    }

    #[test]
    fn test_brightness_saturates() {
        let image = PixelBuffer::from_pixel(1, 1, Rgb([0, 100, 250]));
        assert_eq!(*brightness(&image, delta(10)).get_pixel(0, 0), Rgb([10, 110, 255]));
        assert_eq!(*brightness(&image, delta(-120)).get_pixel(0, 0), Rgb([0, 0, 130]));
        assert_eq!(*brightness(&image, delta(255)).get_pixel(0, 0), Rgb([255, 255, 255]));
        assert_eq!(*brightness(&image, delta(-255)).get_pixel(0, 0), Rgb([0, 0, 0]));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let image = sample();
        assert_eq!(negative_with(&image, Parallelism::Parallel), negative(&image));
        assert_eq!(
            brightness_with(&image, delta(-37), Parallelism::Parallel),
            brightness(&image, delta(-37))
        );
    }
}
