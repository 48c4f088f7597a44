//! Writing the merged document to disk

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::OutputError;

use super::block::MergedBlock;

/// Name of the merged document, created in the working directory.
pub const OUTPUT_FILE_NAME: &str = "merged_text.txt";

/// Write the rendered blocks, in order, to `path`, replacing any existing file.
///
/// Callers are expected to skip this entirely when `blocks` is empty.
pub fn write_document(path: &Path, blocks: &[MergedBlock]) -> Result<(), OutputError> {
    let to_err = |e| OutputError::from_io(path.to_path_buf(), e);

    let file = File::create(path).map_err(to_err)?;
    let mut out = BufWriter::new(file);
    for block in blocks {
        write!(out, "{}", block).map_err(to_err)?;
    }
    out.flush().map_err(to_err)
}
