//! Sub-configuration structs with their defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Processing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Extensions matched when scanning a directory (case-insensitive)
    pub supported_formats: Vec<String>,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            supported_formats: vec![
                "jpg".to_string(),
                "jpeg".to_string(),
                "png".to_string(),
                "tiff".to_string(),
                "bmp".to_string(),
                "webp".to_string(),
            ],
        }
    }
}

/// Font resolution settings.
///
/// The loader tries `font_path` first (when set), then each entry of
/// `fallback_paths` in order, and finally the built-in fixed-size font.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// Preferred font file; tilde-expanded
    pub font_path: Option<PathBuf>,

    /// Well-known font locations tried after `font_path`
    pub fallback_paths: Vec<PathBuf>,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            font_path: None,
            fallback_paths: vec![
                // macOS
                PathBuf::from("/System/Library/Fonts/Supplemental/Arial.ttf"),
                PathBuf::from("/Library/Fonts/Arial.ttf"),
                // Linux
                PathBuf::from("/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf"),
                PathBuf::from("/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf"),
                PathBuf::from("/usr/share/fonts/truetype/freefont/FreeSans.ttf"),
                PathBuf::from("/usr/share/fonts/truetype/freefont/FreeMono.ttf"),
                // Windows
                PathBuf::from("C:\\Windows\\Fonts\\arial.ttf"),
            ],
        }
    }
}

/// Output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Suffix appended to the input directory's base name to form the
    /// output directory (`photos` -> `photos_watermark`)
    pub dir_suffix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir_suffix: "_watermark".to_string(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: "trace", "debug", "info", "warn", "error"
    pub level: String,

    /// Output format: "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
