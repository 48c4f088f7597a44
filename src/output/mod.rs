//! Merged document formatting and output
//!
//! - `block` - A collected file and its delimiter banner
//! - `document` - Splitting a merged document back into blocks
//! - `writer` - Writing the merged document to disk

mod block;
mod document;
mod writer;

pub use block::MergedBlock;
pub use document::split_document;
pub use writer::{OUTPUT_FILE_NAME, write_document};
