//! Test utilities for building temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree for testing.
///
/// The directory is automatically cleaned up when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a text file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        self.add_bytes(path, content.as_bytes())
    }

    /// Add a file with raw bytes, creating parent directories as needed.
    pub fn add_bytes(&self, path: &str, content: &[u8]) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Create an empty directory.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Populate a wide, moderately deep tree of small text files.
    ///
    /// Creates `dirs` directories per level, `depth` levels deep, with
    /// `files` `.txt` files and one `.bin` file in each directory.
    pub fn populate(&self, dirs: usize, depth: usize, files: usize) {
        fn fill(root: &Path, dirs: usize, depth: usize, files: usize) {
            for f in 0..files {
                let path = root.join(format!("file_{f}.txt"));
                fs::write(path, format!("line one of {f}\nline two\n")).expect("Failed to write file");
            }
            fs::write(root.join("blob.bin"), [0u8, 159, 146, 150]).expect("Failed to write file");
            if depth == 0 {
                return;
            }
            for d in 0..dirs {
                let sub = root.join(format!("dir_{d}"));
                fs::create_dir_all(&sub).expect("Failed to create dir");
                fill(&sub, dirs, depth - 1, files);
            }
        }
        fill(self.dir.path(), dirs, depth, files);
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}
