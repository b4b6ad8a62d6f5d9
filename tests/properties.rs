//! Property tests for the filter contracts.

use image::Rgb;
use proptest::prelude::*;
use rasterkit::prelude::*;

fn arb_image() -> impl Strategy<Value = PixelBuffer> {
    (1u32..24, 1u32..24).prop_flat_map(|(w, h)| {
        prop::collection::vec(any::<u8>(), (w * h * 3) as usize).prop_map(move |raw| {
            PixelBuffer::from_raw(w, h, raw).expect("buffer length matches dimensions")
        })
    })
}

fn arb_spec() -> impl Strategy<Value = FilterSpec> {
    let method = prop_oneof![Just(GrayMethod::Average), Just(GrayMethod::Weighted)];
    let channel = prop_oneof![Just(Channel::Red), Just(Channel::Green), Just(Channel::Blue)];
    prop_oneof![
        (1i64..=100).prop_map(|n| FilterSpec::Mosaic {
            block_size: BlockSize::try_from(n).unwrap()
        }),
        method.clone().prop_map(|method| FilterSpec::Grayscale { method }),
        (method, any::<u8>()).prop_map(|(method, t)| FilterSpec::HighContrast {
            method,
            threshold: Threshold::new(t)
        }),
        Just(FilterSpec::Negative),
        channel.prop_map(|channel| FilterSpec::ChannelIsolate { channel }),
        (-255i64..=255).prop_map(|d| FilterSpec::Brightness {
            delta: Delta::try_from(d).unwrap()
        }),
    ]
}

proptest! {
    #[test]
    fn dimensions_are_preserved(image in arb_image(), spec in arb_spec()) {
        let result = spec.apply(&image, Parallelism::Sequential).unwrap();
        prop_assert_eq!(result.dimensions(), image.dimensions());
    }

    #[test]
    fn parallel_sweep_is_bit_identical(image in arb_image(), spec in arb_spec()) {
        let sequential = spec.apply(&image, Parallelism::Sequential).unwrap();
        let parallel = spec.apply(&image, Parallelism::Parallel).unwrap();
        prop_assert_eq!(sequential, parallel);
    }

    #[test]
    fn source_is_never_mutated(image in arb_image(), spec in arb_spec()) {
        let before = image.clone();
        let _ = spec.apply(&image, Parallelism::Parallel).unwrap();
        prop_assert_eq!(image, before);
    }

    #[test]
    fn negative_is_an_involution(image in arb_image()) {
        prop_assert_eq!(negative(&negative(&image)), image);
    }

    #[test]
    fn zero_brightness_is_identity(image in arb_image()) {
        prop_assert_eq!(brightness(&image, Delta::ZERO), image);
    }

    #[test]
    fn full_brightness_saturates(image in arb_image()) {
        let up = brightness(&image, Delta::try_from(255i64).unwrap());
        prop_assert!(up.pixels().all(|p| p.0 == [255, 255, 255]));
        let down = brightness(&image, Delta::try_from(-255i64).unwrap());
        prop_assert!(down.pixels().all(|p| p.0 == [0, 0, 0]));
    }

    #[test]
    fn grayscale_is_monochrome(image in arb_image(), weighted in any::<bool>()) {
        let method = if weighted { GrayMethod::Weighted } else { GrayMethod::Average };
        let result = grayscale(&image, method);
        prop_assert!(result.pixels().all(|p| p[0] == p[1] && p[1] == p[2]));
    }

    #[test]
    fn high_contrast_is_binary(image in arb_image(), t in any::<u8>()) {
        let result = high_contrast(&image, GrayMethod::Weighted, Threshold::new(t));
        prop_assert!(result.pixels().all(|p| p.0 == [0, 0, 0] || p.0 == [255, 255, 255]));
    }

    #[test]
    fn red_isolation_zeroes_other_channels(image in arb_image()) {
        let result = channel_isolate(&image, Channel::Red);
        for (out, src) in result.pixels().zip(image.pixels()) {
            prop_assert_eq!(out.0, [src[0], 0, 0]);
        }
    }

    #[test]
    fn mosaic_blocks_hold_floor_average(image in arb_image(), n in 1u32..8) {
        let size = BlockSize::try_from(n as i64).unwrap();
        let result = mosaic(&image, size);
        let (width, height) = image.dimensions();

        for by in (0..height).step_by(n as usize) {
            for bx in (0..width).step_by(n as usize) {
                let mut sums = [0u64; 3];
                let mut count = 0u64;
                for y in by..(by + n).min(height) {
                    for x in bx..(bx + n).min(width) {
                        let p = image.get_pixel(x, y);
                        for c in 0..3 {
                            sums[c] += p[c] as u64;
                        }
                        count += 1;
                    }
                }
                let expected = Rgb([
                    (sums[0] / count) as u8,
                    (sums[1] / count) as u8,
                    (sums[2] / count) as u8,
                ]);
                for y in by..(by + n).min(height) {
                    for x in bx..(bx + n).min(width) {
                        prop_assert_eq!(*result.get_pixel(x, y), expected);
                    }
                }
            }
        }
    }
}
