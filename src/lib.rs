//! file-merger - merge matching text files from a directory tree into one document

pub mod error;
pub mod file_utils;
pub mod logging;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{LoggingError, MergeError, OutputError, ReadError};
pub use file_utils::read_text_file;
pub use logging::{LOG_FILE_NAME, LoggingConfig, init_logging};
pub use output::{MergedBlock, OUTPUT_FILE_NAME, split_document, write_document};
pub use tree::{Aggregator, DEFAULT_EXTENSIONS, FileFilter, MergeConfig, parse_list};
