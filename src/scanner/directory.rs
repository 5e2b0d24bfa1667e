use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::FileFilter;
use crate::error::Result;

/// Lists eligible articles directly inside a directory. Subdirectories are
/// not descended into.
pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self { filter }
    }

    /// Scan `root` and return matching files in lexicographic filename
    /// order, which is the review and report order.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be read.
    pub fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(root).min_depth(1).max_depth(1) {
            let entry = entry?;
            if entry.file_type().is_file() && self.filter.should_include(entry.path()) {
                files.push(entry.into_path());
            }
        }

        files.sort();
        Ok(files)
    }
}

#[cfg(test)]
#[path = "directory_tests.rs"]
mod tests;
