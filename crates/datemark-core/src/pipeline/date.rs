//! Capture date extraction from EXIF metadata.

use chrono::{Local, NaiveDateTime};
use exif::{In, Reader, Tag};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// The timestamp layout EXIF stores (`2023:05:17 10:22:00`).
const EXIF_DATETIME_FORMAT: &str = "%Y:%m:%d %H:%M:%S";

/// The layout the watermark displays (`2023年05月17日`).
const DISPLAY_FORMAT: &str = "%Y年%m月%d日";

/// Extracts the capture date from image files.
pub struct DateExtractor;

impl DateExtractor {
    /// Extract the capture date, formatted for display.
    ///
    /// Prefers `DateTimeOriginal` (when the shutter fired) over `DateTime`
    /// (last modification). Returns `None` when the file has no EXIF
    /// container, no date field, or an unparseable value; the caller
    /// substitutes today's date. This method never fails outward.
    pub fn extract(path: &Path) -> Option<String> {
        let exif = match Self::read_container(path) {
            Ok(exif) => exif,
            Err(e) => {
                tracing::debug!("No readable EXIF data in {:?}: {}", path, e);
                return None;
            }
        };

        Self::raw_field(&exif, Tag::DateTimeOriginal)
            .or_else(|| Self::raw_field(&exif, Tag::DateTime))
            .and_then(|raw| Self::format_capture_date(&raw))
    }

    /// Today's date in the display pattern, used when no capture date exists.
    pub fn today_display() -> String {
        Local::now().format(DISPLAY_FORMAT).to_string()
    }

    /// Parse a raw EXIF timestamp and reformat it for display.
    ///
    /// Returns `None` when the value doesn't match the EXIF layout.
    pub fn format_capture_date(raw: &str) -> Option<String> {
        NaiveDateTime::parse_from_str(raw.trim(), EXIF_DATETIME_FORMAT)
            .ok()
            .map(|dt| dt.format(DISPLAY_FORMAT).to_string())
    }

    fn read_container(path: &Path) -> Result<exif::Exif, exif::Error> {
        let file = File::open(path).map_err(exif::Error::Io)?;
        let mut reader = BufReader::new(file);
        Reader::new().read_from_container(&mut reader)
    }

    /// Get a date field's raw string value.
    fn raw_field(exif: &exif::Exif, tag: Tag) -> Option<String> {
        exif.get_field(tag, In::PRIMARY).map(|f| {
            let s = f.display_value().to_string();
            // Ascii values display quoted
            s.trim_matches('"').to_string()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_capture_date() {
        assert_eq!(
            DateExtractor::format_capture_date("2023:05:17 10:22:00"),
            Some("2023年05月17日".to_string())
        );
    }

    #[test]
    fn test_format_capture_date_pads_fields() {
        assert_eq!(
            DateExtractor::format_capture_date("2024:01:05 00:00:01"),
            Some("2024年01月05日".to_string())
        );
    }

    #[test]
    fn test_format_capture_date_rejects_garbage() {
        assert_eq!(DateExtractor::format_capture_date("not a date"), None);
        assert_eq!(DateExtractor::format_capture_date(""), None);
        // ISO separators are not the EXIF layout
        assert_eq!(
            DateExtractor::format_capture_date("2023-05-17 10:22:00"),
            None
        );
    }

    #[test]
    fn test_format_capture_date_trims_whitespace() {
        assert_eq!(
            DateExtractor::format_capture_date("  2023:05:17 10:22:00  "),
            Some("2023年05月17日".to_string())
        );
    }

    #[test]
    fn test_extract_missing_file() {
        assert_eq!(DateExtractor::extract(Path::new("/nonexistent/x.jpg")), None);
    }

    #[test]
    fn test_extract_file_without_exif() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plain.png");
        std::fs::write(&path, b"not even an image").unwrap();

        assert_eq!(DateExtractor::extract(&path), None);
    }

    #[test]
    fn test_today_display_shape() {
        let today = DateExtractor::today_display();
        assert!(today.ends_with('日'));
        assert!(today.contains('年'));
        assert!(today.contains('月'));
    }
}
