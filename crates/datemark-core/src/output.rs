//! Output directory layout for watermarked images.
//!
//! Outputs never land next to the sources: they go to a sibling directory
//! named after the input directory's base name plus a suffix, so repeated
//! runs overwrite the same targets instead of accumulating.

use std::path::{Path, PathBuf};

use crate::types::ImageTask;

/// Derive the output directory for an input directory.
///
/// `/tmp/photos` with the default suffix yields
/// `/tmp/photos/photos_watermark`. The caller canonicalizes `input_dir`
/// first so the base name is well-defined for inputs like `.`.
pub fn watermark_dir(input_dir: &Path, suffix: &str) -> PathBuf {
    let base = input_dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "images".to_string());
    input_dir.join(format!("{base}{suffix}"))
}

/// Build the task for one source file: same filename, output directory.
pub fn task_for(source: &Path, output_dir: &Path) -> ImageTask {
    let file_name = source.file_name().unwrap_or(source.as_os_str());
    ImageTask {
        source_path: source.to_path_buf(),
        output_path: output_dir.join(file_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watermark_dir_naming() {
        assert_eq!(
            watermark_dir(Path::new("/tmp/photos"), "_watermark"),
            PathBuf::from("/tmp/photos/photos_watermark")
        );
    }

    #[test]
    fn test_watermark_dir_custom_suffix() {
        assert_eq!(
            watermark_dir(Path::new("/data/trip"), "_stamped"),
            PathBuf::from("/data/trip/trip_stamped")
        );
    }

    #[test]
    fn test_task_keeps_file_name() {
        let task = task_for(
            Path::new("/tmp/photos/IMG_0001.jpg"),
            Path::new("/tmp/photos/photos_watermark"),
        );
        assert_eq!(task.source_path, PathBuf::from("/tmp/photos/IMG_0001.jpg"));
        assert_eq!(
            task.output_path,
            PathBuf::from("/tmp/photos/photos_watermark/IMG_0001.jpg")
        );
    }
}
