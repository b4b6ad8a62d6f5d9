//! Image I/O: decoding input files into the pixel buffer and encoding results.

use crate::core::error::{RasterError, RasterResult};
use crate::core::types::{flatten_to_rgb, PixelBuffer};
use crate::filters::dispatch::FilterSpec;
use image::{ImageFormat, Rgb};
use log::{debug, info};
use std::path::{Path, PathBuf};

/// File extensions accepted as input.
pub const SUPPORTED_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "bmp"];

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

/// Load an image and normalize it to opaque RGB over `background`.
pub fn load_image(path: impl AsRef<Path>, background: Rgb<u8>) -> RasterResult<PixelBuffer> {
    let path = path.as_ref();

    let extension = extension_of(path);
    if !SUPPORTED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(RasterError::Other(format!(
            "Unsupported image format '{}' for {}",
            extension,
            path.display()
        )));
    }

    let decoded = image::open(path)?;
    debug!(
        "Decoded {} ({}x{}, {:?})",
        path.display(),
        decoded.width(),
        decoded.height(),
        decoded.color()
    );

    Ok(flatten_to_rgb(&decoded, background))
}

/// Save an image. The format follows the extension; unknown or missing
/// extensions are written as PNG.
pub fn save_image(image: &PixelBuffer, path: impl AsRef<Path>) -> RasterResult<()> {
    let path = path.as_ref();
    let format = ImageFormat::from_path(path).unwrap_or(ImageFormat::Png);

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            return Err(RasterError::Other(format!(
                "Output directory does not exist: {}",
                parent.display()
            )));
        }
    }

    image.save_with_format(path, format)?;
    info!("Saved {} ({:?})", path.display(), format);
    Ok(())
}

/// Output path next to `input` using the filter's suggested file name.
pub fn suggested_output_path(input: &Path, spec: &FilterSpec) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("image");
    input.with_file_name(spec.suggested_file_name(stem))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggested_output_path() {
        let path = suggested_output_path(Path::new("/tmp/photos/cat.jpg"), &FilterSpec::Negative);
        assert_eq!(path, PathBuf::from("/tmp/photos/cat_negative.png"));
    }

    #[test]
    fn test_unsupported_extension() {
        let err = load_image("notes.txt", Rgb([255, 255, 255])).unwrap_err();
        assert!(err.to_string().contains("Unsupported"));
    }
}
