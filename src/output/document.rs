//! Splitting a merged document back into blocks

use super::block::{DELIMITER_PREFIX, DELIMITER_SUFFIX, MergedBlock, end_delimiter_for};

/// Split a merged document into its blocks.
///
/// Returns `None` if the text is not a sequence of well-formed blocks.
/// Content that itself contains a delimiter line cannot be told apart from
/// a real boundary, so such documents may split differently than they were built.
pub fn split_document(text: &str) -> Option<Vec<MergedBlock>> {
    let mut blocks = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        let (start, after) = rest.split_once("\n\n")?;
        let relative_path = start
            .strip_prefix(DELIMITER_PREFIX)?
            .strip_suffix(DELIMITER_SUFFIX)?;

        let closing = format!("\n\n{}\n\n", end_delimiter_for(start));
        let end = after.find(&closing)?;
        blocks.push(MergedBlock::new(relative_path, &after[..end]));
        rest = &after[end + closing.len()..];
    }

    Some(blocks)
}
