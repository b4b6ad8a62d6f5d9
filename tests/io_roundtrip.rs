//! File-level tests: decode, filter, encode.

use image::{DynamicImage, Rgb, Rgba, RgbaImage};
use rasterkit::prelude::*;
use std::path::Path;
use tempfile::TempDir;

fn write_png(dir: &Path, name: &str, image: &PixelBuffer) -> std::path::PathBuf {
    let path = dir.join(name);
    image.save(&path).unwrap();
    path
}

#[test]
fn test_filter_file_end_to_end() {
    let dir = TempDir::new().unwrap();
    let mut source = PixelBuffer::new(2, 2);
    source.put_pixel(0, 0, Rgb([10, 20, 30]));
    source.put_pixel(1, 0, Rgb([200, 100, 50]));
    source.put_pixel(0, 1, Rgb([0, 0, 0]));
    source.put_pixel(1, 1, Rgb([255, 255, 255]));
    let input = write_png(dir.path(), "tiles.png", &source);

    let registry = FilterRegistry::with_builtins();
    let spec = FilterSpec::from_parameters(
        &registry,
        "mosaic",
        &ParameterSet::new().with("block_size", 2),
    )
    .unwrap();

    let image = load_image(&input, Rgb([255, 255, 255])).unwrap();
    let engine = ExecutionEngine::new(ProcessingConfig::default());
    let result = engine.execute(&spec, &image).unwrap();

    let output = suggested_output_path(&input, &spec);
    assert_eq!(output.file_name().unwrap(), "tiles_mosaic.png");
    save_image(&result.image, &output).unwrap();

    let reloaded = load_image(&output, Rgb([0, 0, 0])).unwrap();
    assert!(reloaded.pixels().all(|p| *p == Rgb([116, 93, 83])));
}

#[test]
fn test_alpha_is_flattened_before_filtering() {
    let dir = TempDir::new().unwrap();
    let mut rgba = RgbaImage::new(2, 1);
    rgba.put_pixel(0, 0, Rgba([10, 20, 30, 255]));
    rgba.put_pixel(1, 0, Rgba([10, 20, 30, 0]));
    let path = dir.path().join("alpha.png");
    DynamicImage::ImageRgba8(rgba).save(&path).unwrap();

    let image = load_image(&path, Rgb([255, 255, 255])).unwrap();
    assert_eq!(*image.get_pixel(0, 0), Rgb([10, 20, 30]));
    assert_eq!(*image.get_pixel(1, 0), Rgb([255, 255, 255]));

    let inverted = negative(&image);
    assert_eq!(*inverted.get_pixel(1, 0), Rgb([0, 0, 0]));
}

#[test]
fn test_config_file_drives_engine() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rasterkit.toml");
    std::fs::write(&path, "parallel = false\nbackground = [0, 0, 0]\n").unwrap();

    let config = ProcessingConfig::from_toml_file(&path).unwrap();
    let engine = ExecutionEngine::new(config);
    assert_eq!(engine.parallelism(), Parallelism::Sequential);
    assert_eq!(engine.config().background, [0, 0, 0]);
}

#[test]
fn test_missing_input_is_an_error() {
    let dir = TempDir::new().unwrap();
    let err = load_image(dir.path().join("absent.png"), Rgb([255, 255, 255])).unwrap_err();
    assert!(matches!(err, RasterError::Image(_) | RasterError::Io(_)));
}

#[test]
fn test_save_into_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("nope").join("out.png");
    let image = PixelBuffer::new(1, 1);
    assert!(save_image(&image, target).is_err());
}
