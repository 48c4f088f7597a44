//! Shared file reading utilities
//!
//! Reading is split from traversal so the walker can match on the outcome
//! of each file instead of unwinding through it.

use std::path::Path;

use crate::error::ReadError;

/// Read the full contents of a file as UTF-8 text.
///
/// Returns:
/// - `ReadError::NotFound` if the file vanished after it was listed
/// - `ReadError::PermissionDenied` if it cannot be opened
/// - `ReadError::Decode` if the bytes are not valid UTF-8 (binary files)
/// - `ReadError::Io` for anything else
///
/// Line endings are normalized: `\r\n` and lone `\r` both become `\n`.
pub fn read_text_file(path: &Path) -> Result<String, ReadError> {
    let bytes = std::fs::read(path)?;
    let content = String::from_utf8(bytes).map_err(|_| ReadError::Decode)?;
    Ok(normalize_newlines(content))
}

fn normalize_newlines(content: String) -> String {
    if !content.contains('\r') {
        return content;
    }
    content.replace("\r\n", "\n").replace('\r', "\n")
}

/// Check whether a file name ends with any of the given suffixes.
///
/// This is a plain string suffix test, not an extension comparison:
/// `"notes.txt"` and `"footxt"` both match `"txt"`.
pub fn has_matching_suffix(name: &str, suffixes: &[String]) -> bool {
    suffixes.iter().any(|suffix| name.ends_with(suffix.as_str()))
}
