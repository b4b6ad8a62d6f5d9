//! Sequential versus parallel sweeps for each filter.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use image::Rgb;
use rasterkit::prelude::*;

fn sample_image(width: u32, height: u32) -> PixelBuffer {
    PixelBuffer::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x ^ y) % 256) as u8])
    })
}

fn bench_filters(c: &mut Criterion) {
    let image = sample_image(1024, 768);
    let specs = [
        FilterSpec::Mosaic {
            block_size: BlockSize::try_from(10i64).unwrap(),
        },
        FilterSpec::Grayscale {
            method: GrayMethod::Weighted,
        },
        FilterSpec::HighContrast {
            method: GrayMethod::Average,
            threshold: Threshold::new(128),
        },
        FilterSpec::Negative,
        FilterSpec::ChannelIsolate {
            channel: Channel::Green,
        },
        FilterSpec::Brightness {
            delta: Delta::try_from(40i64).unwrap(),
        },
    ];

    let mut group = c.benchmark_group("filters");
    for spec in &specs {
        for parallelism in [Parallelism::Sequential, Parallelism::Parallel] {
            group.bench_with_input(
                BenchmarkId::new(spec.id(), format!("{:?}", parallelism)),
                &parallelism,
                |b, &parallelism| b.iter(|| spec.apply(black_box(&image), parallelism).unwrap()),
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_filters);
criterion_main!(benches);
