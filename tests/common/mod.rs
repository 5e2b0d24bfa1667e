#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates a temporary article directory for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates an article with the given content in the temp directory.
    pub fn create_article(&self, filename: &str, content: &str) {
        fs::write(self.dir.path().join(filename), content).expect("Failed to write article");
    }

    /// Creates a file with raw bytes, e.g. to simulate undecodable input.
    pub fn create_raw(&self, filename: &str, bytes: &[u8]) {
        fs::write(self.dir.path().join(filename), bytes).expect("Failed to write file");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
