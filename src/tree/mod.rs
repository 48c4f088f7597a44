//! Directory tree walking logic
//!
//! The `Aggregator` walks a root directory, prunes hidden and unlisted
//! folders, and reads every file whose name ends with a requested suffix.

mod config;
mod filter;
mod walker;

pub use config::{DEFAULT_EXTENSIONS, MergeConfig, parse_list};
pub use filter::FileFilter;
pub use walker::Aggregator;
