//! Name-based filtering for tree walking

use crate::file_utils::has_matching_suffix;

use super::config::MergeConfig;

/// Decides which directories are descended into and which files are collected.
#[derive(Debug, Clone)]
pub struct FileFilter {
    extensions: Vec<String>,
    folders: Option<Vec<String>>,
}

impl FileFilter {
    pub fn new(config: &MergeConfig) -> Self {
        Self {
            extensions: config.extensions.clone(),
            folders: config.folders.clone().filter(|f| !f.is_empty()),
        }
    }

    /// Check if a subdirectory with this name should be descended into.
    ///
    /// Hidden directories are always pruned. With a folder filter, only
    /// listed names survive, and that applies at every level of the tree.
    pub fn allows_dir(&self, name: &str) -> bool {
        if name.starts_with('.') {
            return false;
        }
        match &self.folders {
            Some(folders) => folders.iter().any(|f| f == name),
            None => true,
        }
    }

    /// Check if a file with this name should be collected.
    pub fn matches_file(&self, name: &str) -> bool {
        has_matching_suffix(name, &self.extensions)
    }
}
