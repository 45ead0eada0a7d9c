//! Core data types shared across the watermarking pipeline.

use std::path::PathBuf;

use crate::color::Color;
use crate::pipeline::layout::Anchor;

/// A single unit of work: one source image and where its stamped copy goes.
///
/// Created by the batch driver per discovered file and discarded after the
/// file is processed.
#[derive(Debug, Clone)]
pub struct ImageTask {
    /// Path to the source image (never mutated)
    pub source_path: PathBuf,

    /// Path the watermarked copy is written to
    pub output_path: PathBuf,
}

impl ImageTask {
    /// The source filename for log messages, lossy on non-UTF-8 names.
    pub fn file_name(&self) -> String {
        self.source_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "unknown".to_string())
    }
}

/// Immutable per-run watermark settings, shared read-only across all tasks.
#[derive(Debug, Clone, Copy)]
pub struct WatermarkSpec {
    /// Requested font size in pixels (must be positive)
    pub font_size: u32,

    /// Text color; the shadow is always black regardless
    pub color: Color,

    /// Where on the image the text box is anchored
    pub anchor: Anchor,
}

/// Measured bounding box of the watermark string under the resolved font.
///
/// Recomputed per image, since the text (the date) varies from file to file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextMetrics {
    /// Text width in pixels
    pub width: u32,

    /// Text height in pixels
    pub height: u32,
}

/// Outcome counters for a batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Files watermarked and written successfully
    pub processed: u64,

    /// Files skipped after a per-file failure
    pub failed: u64,
}

impl RunStats {
    /// Total number of files attempted.
    pub fn total(&self) -> u64 {
        self.processed + self.failed
    }
}
