use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{Result, StyleGuardError};

/// Markdown article file extension.
pub const ARTICLE_EXTENSION: &str = "md";

/// Reserved directory index file, never reviewed.
pub const INDEX_FILENAME: &str = "INDEX.md";

pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;
}

/// Selects Markdown articles: `.md` files except the reserved index file
/// and anything matching the user's exclude patterns.
pub struct ArticleFilter {
    exclude_patterns: GlobSet,
}

impl ArticleFilter {
    /// Create a new filter with the given exclude patterns.
    ///
    /// # Errors
    /// Returns an error if any exclude pattern is invalid.
    pub fn new(exclude_patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_patterns {
            let glob = Glob::new(pattern).map_err(|e| StyleGuardError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let exclude_patterns = builder
            .build()
            .map_err(|e| StyleGuardError::InvalidPattern {
                pattern: "combined patterns".to_string(),
                source: e,
            })?;

        Ok(Self { exclude_patterns })
    }

    fn is_article(path: &Path) -> bool {
        let has_extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == ARTICLE_EXTENSION);

        let is_index = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name == INDEX_FILENAME);

        has_extension && !is_index
    }

    fn is_excluded(&self, path: &Path) -> bool {
        self.exclude_patterns.is_match(path)
    }
}

impl FileFilter for ArticleFilter {
    fn should_include(&self, path: &Path) -> bool {
        Self::is_article(path) && !self.is_excluded(path)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
