//! Merged blocks and their delimiter banners

use std::fmt;

pub(crate) const DELIMITER_PREFIX: &str = "############# ";
pub(crate) const DELIMITER_SUFFIX: &str = " #############";

/// One collected file: its path relative to the root and its text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedBlock {
    pub relative_path: String,
    pub content: String,
}

impl MergedBlock {
    pub fn new(relative_path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            relative_path: relative_path.into(),
            content: content.into(),
        }
    }

    /// The banner opening this block, e.g. `############# a.txt #############`.
    pub fn start_delimiter(&self) -> String {
        format!("{}{}{}", DELIMITER_PREFIX, self.relative_path, DELIMITER_SUFFIX)
    }

    /// A run of `#` as long as the start delimiter, counted in characters.
    pub fn end_delimiter(&self) -> String {
        end_delimiter_for(&self.start_delimiter())
    }

    /// Render the block as it appears in the merged document.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MergedBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let start = self.start_delimiter();
        let end = end_delimiter_for(&start);
        write!(f, "{}\n\n{}\n\n{}\n\n", start, self.content, end)
    }
}

pub(crate) fn end_delimiter_for(start: &str) -> String {
    "#".repeat(start.chars().count())
}
