//! File discovery for finding images to watermark.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::ProcessingConfig;

/// Discovers image files at an input path.
pub struct FileDiscovery {
    config: ProcessingConfig,
}

impl FileDiscovery {
    /// Create a new file discovery instance.
    pub fn new(config: ProcessingConfig) -> Self {
        Self { config }
    }

    /// Discover image files at a path.
    ///
    /// If path is a file, returns it unconditionally: a file named
    /// explicitly is processed even with an unusual extension.
    /// If path is a directory, lists its direct children (no recursion)
    /// and keeps those with a supported extension. Each file is matched
    /// once, so `.JPG`/`.jpg` case variants cannot produce duplicates.
    pub fn discover(&self, path: &Path) -> Vec<PathBuf> {
        if path.is_file() {
            return vec![path.to_path_buf()];
        }

        let mut files: Vec<PathBuf> = WalkDir::new(path)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_file() && self.is_supported(e.path()))
            .map(|e| e.path().to_path_buf())
            .collect();

        // Sort by path for deterministic ordering
        files.sort();
        files
    }

    /// Check if a file has a supported extension.
    fn is_supported(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                let ext_lower = ext.to_lowercase();
                self.config
                    .supported_formats
                    .iter()
                    .any(|fmt| fmt.to_lowercase() == ext_lower)
            })
            .unwrap_or(false)
    }
}
