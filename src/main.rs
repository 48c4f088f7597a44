//! CLI entry point for file-merger

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use file_merger::{
    Aggregator, DEFAULT_EXTENSIONS, LOG_FILE_NAME, LoggingConfig, MergeConfig, OUTPUT_FILE_NAME,
    init_logging, parse_list, write_document,
};
use tracing::{error, info, warn};

#[derive(Parser, Debug)]
#[command(name = "file-merger")]
#[command(about = "Merge text files from a directory.")]
#[command(version)]
struct Args {
    /// Comma-separated list of file extensions to include (e.g., .py,.txt,.md)
    #[arg(short, long, default_value = DEFAULT_EXTENSIONS)]
    extensions: String,

    /// Comma-separated list of folder names to include (optional)
    #[arg(short, long)]
    folders: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let extensions = parse_list(&args.extensions);
    // An empty --folders value means no folder filter
    let folders = args
        .folders
        .as_deref()
        .filter(|f| !f.is_empty())
        .map(parse_list);

    let _guard = match init_logging(&LoggingConfig::default()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("file-merger: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let root = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            error!("The working directory does not exist: {}", e);
            return ExitCode::FAILURE;
        }
    };

    run(&root, MergeConfig::new(extensions, folders))
}

/// Collect matching files under `root` and write them to the output file.
fn run(root: &Path, config: MergeConfig) -> ExitCode {
    let output_path = root.join(OUTPUT_FILE_NAME);

    // Never merge our own output or log from a previous run
    let config = config
        .with_exclude(output_path.clone())
        .with_exclude(root.join(LOG_FILE_NAME));

    let blocks = match Aggregator::new(config).collect(root) {
        Ok(blocks) => blocks,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    if blocks.is_empty() {
        warn!("No files found matching the specified extensions and folders.");
        return ExitCode::SUCCESS;
    }

    match write_document(&output_path, &blocks) {
        Ok(()) => {
            info!("Merged text saved to: {}", OUTPUT_FILE_NAME);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
