//! Per-file pipeline orchestration: decode, stamp, re-encode.

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, RgbImage};
use std::fs::File;
use std::path::Path;

use crate::config::Config;
use crate::error::{PipelineError, PipelineResult};
use crate::pipeline::decode;
use crate::pipeline::font::ResolvedFont;
use crate::pipeline::render::WatermarkRenderer;
use crate::types::{ImageTask, WatermarkSpec};

/// Fixed JPEG re-encode quality.
const JPEG_QUALITY: u8 = 95;

/// Processes one image at a time through the full pipeline.
///
/// The font is resolved once at construction; everything the processor
/// holds is immutable afterwards, so each file sees identical settings.
pub struct WatermarkProcessor {
    renderer: WatermarkRenderer,
}

impl WatermarkProcessor {
    /// Create a processor, resolving the font from the given configuration.
    pub fn new(config: &Config, spec: WatermarkSpec) -> Self {
        let font = ResolvedFont::resolve(&config.font_candidates());
        Self {
            renderer: WatermarkRenderer::new(font, spec),
        }
    }

    /// Create a processor around an already-resolved font.
    pub fn with_font(font: ResolvedFont, spec: WatermarkSpec) -> Self {
        Self {
            renderer: WatermarkRenderer::new(font, spec),
        }
    }

    /// Stamp one image with `text` and write the result.
    ///
    /// The source is opened, fully processed, and closed before returning;
    /// the file is never mutated. Failures carry the stage and path.
    pub fn process(&self, task: &ImageTask, text: &str) -> PipelineResult<()> {
        let start = std::time::Instant::now();
        tracing::debug!("Processing: {:?}", task.source_path);

        let decoded = decode::decode(&task.source_path)?;
        tracing::trace!("  Decoded {}x{}", decoded.width, decoded.height);

        // Normalize to 3-channel RGB before drawing
        let mut canvas = decoded.image.to_rgb8();
        self.renderer.render(&mut canvas, text);
        tracing::trace!("  Rendered \"{}\"", text);

        self.encode(canvas, &task.output_path)?;

        tracing::debug!(
            "Processed {:?} -> {} in {:?}",
            task.file_name(),
            text,
            start.elapsed()
        );
        Ok(())
    }

    /// Write the stamped canvas, creating missing output directories.
    ///
    /// JPEG outputs are re-encoded at the fixed quality; every other format
    /// is a pass-through save in the normalized RGB mode.
    fn encode(&self, canvas: RgbImage, output_path: &Path) -> PipelineResult<()> {
        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| PipelineError::Encode {
                path: output_path.to_path_buf(),
                message: format!("Cannot create output directory: {}", e),
            })?;
        }

        if is_jpeg_path(output_path) {
            let mut file = File::create(output_path).map_err(|e| PipelineError::Encode {
                path: output_path.to_path_buf(),
                message: format!("Cannot create file: {}", e),
            })?;
            let encoder = JpegEncoder::new_with_quality(&mut file, JPEG_QUALITY);
            canvas
                .write_with_encoder(encoder)
                .map_err(|e| PipelineError::Encode {
                    path: output_path.to_path_buf(),
                    message: e.to_string(),
                })?;
        } else {
            DynamicImage::ImageRgb8(canvas)
                .save(output_path)
                .map_err(|e| PipelineError::Encode {
                    path: output_path.to_path_buf(),
                    message: e.to_string(),
                })?;
        }
        Ok(())
    }
}

fn is_jpeg_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            let e = e.to_ascii_lowercase();
            e == "jpg" || e == "jpeg"
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::pipeline::layout::Anchor;
    use image::Rgb;
    use std::path::PathBuf;

    fn spec() -> WatermarkSpec {
        WatermarkSpec {
            font_size: 36,
            color: Color::white(),
            anchor: Anchor::BottomRight,
        }
    }

    fn write_test_image(path: &Path, w: u32, h: u32) {
        let img = RgbImage::from_pixel(w, h, Rgb([90, 120, 150]));
        img.save(path).unwrap();
    }

    #[test]
    fn test_is_jpeg_path() {
        assert!(is_jpeg_path(Path::new("a.jpg")));
        assert!(is_jpeg_path(Path::new("a.JPEG")));
        assert!(!is_jpeg_path(Path::new("a.png")));
        assert!(!is_jpeg_path(Path::new("a")));
    }

    #[test]
    fn test_process_writes_output() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("in.png");
        write_test_image(&source, 200, 100);

        let task = ImageTask {
            source_path: source,
            output_path: dir.path().join("out/in.png"),
        };
        let processor = WatermarkProcessor::with_font(ResolvedFont::Builtin, spec());
        processor.process(&task, "2023年05月17日").unwrap();

        assert!(task.output_path.exists());
        let out = image::open(&task.output_path).unwrap().to_rgb8();
        assert_eq!(out.dimensions(), (200, 100));
        // The stamp changed some pixels
        assert!(out.pixels().any(|p| p.0 != [90, 120, 150]));
    }

    #[test]
    fn test_process_jpeg_output_decodes_as_jpeg() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("in.jpg");
        write_test_image(&source, 120, 80);

        let task = ImageTask {
            source_path: source,
            output_path: dir.path().join("out/in.jpg"),
        };
        let processor = WatermarkProcessor::with_font(ResolvedFont::Builtin, spec());
        processor.process(&task, "2023年05月17日").unwrap();

        let format = image::ImageReader::open(&task.output_path)
            .unwrap()
            .with_guessed_format()
            .unwrap()
            .format();
        assert_eq!(format, Some(image::ImageFormat::Jpeg));
    }

    #[test]
    fn test_process_corrupt_source_fails_with_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("broken.jpg");
        std::fs::write(&source, b"garbage").unwrap();

        let task = ImageTask {
            source_path: source,
            output_path: dir.path().join("out/broken.jpg"),
        };
        let processor = WatermarkProcessor::with_font(ResolvedFont::Builtin, spec());
        let err = processor.process(&task, "2023年05月17日").unwrap_err();
        assert!(matches!(err, PipelineError::Decode { .. }));
        assert!(!task.output_path.exists());
    }

    #[test]
    fn test_process_source_is_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("in.png");
        write_test_image(&source, 64, 64);
        let before = std::fs::read(&source).unwrap();

        let task = ImageTask {
            source_path: source.clone(),
            output_path: dir.path().join("out/in.png"),
        };
        let processor = WatermarkProcessor::with_font(ResolvedFont::Builtin, spec());
        processor.process(&task, "2024年01月01日").unwrap();

        assert_eq!(std::fs::read(&source).unwrap(), before);
    }

    #[test]
    fn test_processor_new_resolves_from_config() {
        // Config with no usable font paths still yields a working processor
        let mut config = Config::default();
        config.fonts.fallback_paths = vec![PathBuf::from("/nonexistent/font.ttf")];

        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("in.bmp");
        write_test_image(&source, 60, 60);

        let task = ImageTask {
            source_path: source,
            output_path: dir.path().join("out/in.bmp"),
        };
        let processor = WatermarkProcessor::new(&config, spec());
        processor.process(&task, "2024年02月03日").unwrap();
        assert!(task.output_path.exists());
    }
}
