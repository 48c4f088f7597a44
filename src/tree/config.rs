//! Configuration types for the aggregator

use std::path::PathBuf;

/// Extensions used when none are given on the command line.
pub const DEFAULT_EXTENSIONS: &str = ".txt";

/// Configuration for which files get collected.
#[derive(Debug, Clone)]
pub struct MergeConfig {
    /// Literal filename suffixes, e.g. `.txt`. Must not be empty.
    pub extensions: Vec<String>,
    /// Directory names that may be descended into, at every depth.
    /// `None` means every non-hidden directory is eligible.
    pub folders: Option<Vec<String>>,
    /// Absolute paths that are never collected (the output and log files).
    pub exclude: Vec<PathBuf>,
}

impl MergeConfig {
    pub fn new(extensions: Vec<String>, folders: Option<Vec<String>>) -> Self {
        Self {
            extensions,
            folders,
            exclude: Vec::new(),
        }
    }

    pub fn with_exclude(mut self, path: PathBuf) -> Self {
        self.exclude.push(path);
        self
    }
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self::new(parse_list(DEFAULT_EXTENSIONS), None)
    }
}

/// Split a comma-separated list, trimming whitespace around each entry.
///
/// Entries are otherwise kept verbatim, blanks included: an empty suffix
/// matches every file and an empty folder name matches no directory.
pub fn parse_list(s: &str) -> Vec<String> {
    s.split(',').map(|item| item.trim().to_string()).collect()
}
