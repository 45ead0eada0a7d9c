//! Image decoding with format detection.

use image::{DynamicImage, GenericImageView, ImageFormat};
use std::path::Path;

use crate::error::PipelineError;

/// Result of decoding an image.
pub struct DecodedImage {
    /// The decoded image data
    pub image: DynamicImage,
    /// Detected image format
    pub format: ImageFormat,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
}

/// Decode an image from disk, detecting the format from content rather
/// than trusting the extension.
pub fn decode(path: &Path) -> Result<DecodedImage, PipelineError> {
    let reader = image::ImageReader::open(path)
        .map_err(|e| PipelineError::Decode {
            path: path.to_path_buf(),
            message: format!("Cannot open file: {}", e),
        })?
        .with_guessed_format()
        .map_err(|e| PipelineError::Decode {
            path: path.to_path_buf(),
            message: format!("Cannot detect image format: {}", e),
        })?;

    let format = match reader.format() {
        Some(f) => f,
        None => ImageFormat::from_path(path).map_err(|_| PipelineError::Decode {
            path: path.to_path_buf(),
            message: "Unrecognized image format".to_string(),
        })?,
    };

    let image = reader.decode().map_err(|e| PipelineError::Decode {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let (width, height) = image.dimensions();
    Ok(DecodedImage {
        image,
        format,
        width,
        height,
    })
}
