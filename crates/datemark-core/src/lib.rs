//! datemark core - Embeddable capture-date watermarking library.
//!
//! datemark stamps photos with the date they were taken, read from EXIF
//! metadata, falling back to the current date when none is recorded.
//!
//! # Architecture
//!
//! A pure per-file pipeline with no shared mutable state:
//!
//! ```text
//! Image → Decode → Extract capture date → Layout → Draw shadow + text → Encode
//! ```
//!
//! Files are processed one at a time; a failure on one file never affects
//! the others.
//!
//! # Usage
//!
//! ```rust,ignore
//! use datemark_core::{
//!     Anchor, Color, Config, DateExtractor, ImageTask, WatermarkProcessor, WatermarkSpec,
//! };
//!
//! let config = Config::load()?;
//! let spec = WatermarkSpec {
//!     font_size: 36,
//!     color: Color::white(),
//!     anchor: Anchor::BottomRight,
//! };
//! let processor = WatermarkProcessor::new(&config, spec);
//!
//! let text = DateExtractor::extract(&task.source_path)
//!     .unwrap_or_else(DateExtractor::today_display);
//! processor.process(&task, &text)?;
//! ```

// Module declarations
pub mod color;
pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod types;

// Re-exports for convenient access
pub use color::{Color, ColorParseError};
pub use config::Config;
pub use error::{ConfigError, DatemarkError, PipelineError, PipelineResult, Result};
pub use output::{task_for, watermark_dir};
pub use pipeline::{Anchor, DateExtractor, FileDiscovery, WatermarkProcessor, WatermarkRenderer};
pub use types::{ImageTask, RunStats, TextMetrics, WatermarkSpec};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
