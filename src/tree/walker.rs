//! Aggregator - walks the tree and collects matching files as blocks

use std::cmp::Ordering;
use std::path::Path;

use ignore::{DirEntry, WalkBuilder};
use tracing::{debug, info, warn};

use crate::error::{MergeError, ReadError};
use crate::file_utils::read_text_file;
use crate::output::MergedBlock;

use super::config::MergeConfig;
use super::filter::FileFilter;

/// Walks a directory tree and turns every matching text file into a block.
///
/// Order is depth-first: within each directory its files come first, then
/// its subdirectories, each group sorted by name.
pub struct Aggregator {
    config: MergeConfig,
}

impl Aggregator {
    pub fn new(config: MergeConfig) -> Self {
        Self { config }
    }

    /// Collect blocks for every matching, readable file under `root`.
    ///
    /// Missing, unreadable, and non-UTF-8 files are logged and skipped, as
    /// are directories that cannot be listed (the root included). A missing
    /// root, or any other I/O failure while reading a file, aborts.
    pub fn collect(&self, root: &Path) -> Result<Vec<MergedBlock>, MergeError> {
        if !root.is_dir() {
            return Err(MergeError::RootNotFound(root.to_path_buf()));
        }

        let filter = FileFilter::new(&self.config);
        let mut blocks = Vec::new();

        for result in self.build_walker(root, filter.clone()) {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    warn!("Skipping unreadable directory entry: {}", err);
                    continue;
                }
            };

            if entry.depth() == 0 || is_dir_entry(&entry) {
                continue;
            }

            let path = entry.path();
            if self.config.exclude.iter().any(|excluded| excluded == path) {
                debug!("Skipping excluded file: {}", path.display());
                continue;
            }
            if !filter.matches_file(&entry.file_name().to_string_lossy()) {
                continue;
            }
            // A symlink to a directory is never collected or descended into
            if path.is_dir() {
                continue;
            }

            let relative_path = relative_to(path, root);
            info!("Processing: {}", relative_path);

            match read_text_file(path) {
                Ok(content) => blocks.push(MergedBlock::new(relative_path, content)),
                Err(ReadError::NotFound) => warn!("File not found: {}", relative_path),
                Err(ReadError::PermissionDenied) => {
                    warn!("Permission denied: {}", relative_path)
                }
                Err(ReadError::Decode) => {
                    warn!("Unable to decode file (likely not text): {}", relative_path)
                }
                Err(ReadError::Io(err)) => return Err(MergeError::Traversal(err)),
            }
        }

        Ok(blocks)
    }

    fn build_walker(&self, root: &Path, filter: FileFilter) -> ignore::Walk {
        WalkBuilder::new(root)
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_path(files_then_dirs)
            .filter_entry(move |entry| {
                if entry.depth() == 0 || !is_dir_entry(entry) {
                    return true;
                }
                let allowed = filter.allows_dir(&entry.file_name().to_string_lossy());
                if !allowed {
                    debug!("Pruning directory: {}", entry.path().display());
                }
                allowed
            })
            .build()
    }
}

fn is_dir_entry(entry: &DirEntry) -> bool {
    entry.file_type().is_some_and(|ft| ft.is_dir())
}

/// Files sort before directories; ties break on file name.
fn files_then_dirs(a: &Path, b: &Path) -> Ordering {
    (a.is_dir(), a.file_name()).cmp(&(b.is_dir(), b.file_name()))
}

fn relative_to(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::parse_list;
    use std::fs;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &[u8]) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn collect(root: &Path, exts: &str, folders: Option<&str>) -> Vec<MergedBlock> {
        let config = MergeConfig::new(parse_list(exts), folders.map(parse_list));
        Aggregator::new(config).collect(root).unwrap()
    }

    fn paths(blocks: &[MergedBlock]) -> Vec<&str> {
        blocks.iter().map(|b| b.relative_path.as_str()).collect()
    }

    #[test]
    fn test_collects_top_level_and_nested() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "a.txt", b"hello");
        write(dir.path(), "sub/b.txt", b"world");

        let blocks = collect(dir.path(), ".txt", None);
        assert_eq!(
            blocks,
            vec![
                MergedBlock::new("a.txt", "hello"),
                MergedBlock::new("sub/b.txt", "world"),
            ]
        );
    }

    #[test]
    fn test_files_before_subdirectories() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "b.txt", b"");
        write(dir.path(), "a/inner.txt", b"");
        write(dir.path(), "c.txt", b"");
        write(dir.path(), "a/z/deep.txt", b"");
        write(dir.path(), "a/m.txt", b"");

        let blocks = collect(dir.path(), ".txt", None);
        assert_eq!(
            paths(&blocks),
            vec!["b.txt", "c.txt", "a/inner.txt", "a/m.txt", "a/z/deep.txt"]
        );
    }

    #[test]
    fn test_extension_filter() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "a.txt", b"a");
        write(dir.path(), "b.md", b"b");
        write(dir.path(), "c.rs", b"c");

        let blocks = collect(dir.path(), ".txt, .md", None);
        assert_eq!(paths(&blocks), vec!["a.txt", "b.md"]);
    }

    #[test]
    fn test_hidden_directories_skipped_but_hidden_files_kept() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), ".git/config.txt", b"nope");
        write(dir.path(), "sub/.cache/x.txt", b"nope");
        write(dir.path(), ".env.txt", b"yes");

        let blocks = collect(dir.path(), ".txt", None);
        assert_eq!(paths(&blocks), vec![".env.txt"]);
    }

    #[test]
    fn test_folder_filter_applies_at_every_depth() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "top.txt", b"root files always count");
        write(dir.path(), "sub/b.txt", b"in");
        write(dir.path(), "sub/sub/deeper.txt", b"in");
        write(dir.path(), "sub/nested/c.txt", b"out");
        write(dir.path(), "other/c.txt", b"out");

        let blocks = collect(dir.path(), ".txt", Some("sub"));
        assert_eq!(paths(&blocks), vec!["top.txt", "sub/b.txt", "sub/sub/deeper.txt"]);
    }

    #[test]
    fn test_binary_file_skipped() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "a.txt", b"text");
        write(dir.path(), "notes.bin", &[0xff, 0xfe, 0xfd, 0x00]);

        let blocks = collect(dir.path(), ".txt,.bin", None);
        assert_eq!(paths(&blocks), vec!["a.txt"]);
    }

    #[test]
    fn test_excluded_paths_not_collected() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "a.txt", b"a");
        write(dir.path(), "merged_text.txt", b"previous run");

        let config = MergeConfig::new(parse_list(".txt"), None)
            .with_exclude(dir.path().join("merged_text.txt"));
        let blocks = Aggregator::new(config).collect(dir.path()).unwrap();
        assert_eq!(paths(&blocks), vec!["a.txt"]);
    }

    #[test]
    fn test_no_matches_is_empty() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "main.rs", b"fn main() {}");

        assert!(collect(dir.path(), ".txt", None).is_empty());
    }

    #[test]
    fn test_missing_root() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing");
        let result = Aggregator::new(MergeConfig::default()).collect(&missing);
        assert!(matches!(result, Err(MergeError::RootNotFound(_))));
    }

    #[test]
    fn test_collect_is_deterministic() {
        let dir = TempDir::new().unwrap();
        for name in ["q.txt", "b.txt", "x/y.txt", "x/a.txt", "m/n/o.txt"] {
            write(dir.path(), name, name.as_bytes());
        }

        let first = collect(dir.path(), ".txt", None);
        let second = collect(dir.path(), ".txt", None);
        assert_eq!(first, second);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_directory_not_descended() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "real/a.txt", b"a");
        std::os::unix::fs::symlink(dir.path().join("real"), dir.path().join("link.txt")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("real"), dir.path().join("linkdir")).unwrap();

        let blocks = collect(dir.path(), ".txt", None);
        assert_eq!(paths(&blocks), vec!["real/a.txt"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_self_referential_symlink_aborts() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "a.txt", b"a");
        std::os::unix::fs::symlink("loop.txt", dir.path().join("loop.txt")).unwrap();

        let result = Aggregator::new(MergeConfig::default()).collect(dir.path());
        assert!(matches!(result, Err(MergeError::Traversal(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_root_yields_no_blocks() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let root = dir.path().join("locked");
        write(&root, "a.txt", b"a");
        fs::set_permissions(&root, fs::Permissions::from_mode(0o000)).unwrap();

        // Privileged users can list it anyway
        if fs::read_dir(&root).is_ok() {
            fs::set_permissions(&root, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let result = Aggregator::new(MergeConfig::default()).collect(&root);
        fs::set_permissions(&root, fs::Permissions::from_mode(0o755)).unwrap();
        assert!(result.unwrap().is_empty());
    }

    #[test]
    fn test_blank_extension_matches_every_file() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "notes.md", b"md");
        write(dir.path(), "noext", b"plain");

        let blocks = collect(dir.path(), ".md,", None);
        assert_eq!(paths(&blocks), vec!["noext", "notes.md"]);
    }

    #[test]
    fn test_blank_folder_names_keep_only_root_files() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "top.txt", b"top");
        write(dir.path(), "sub/b.txt", b"b");

        let blocks = collect(dir.path(), ".txt", Some(" , "));
        assert_eq!(paths(&blocks), vec!["top.txt"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_broken_symlink_skipped() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "a.txt", b"a");
        std::os::unix::fs::symlink("nonexistent.txt", dir.path().join("broken.txt")).unwrap();

        let blocks = collect(dir.path(), ".txt", None);
        assert_eq!(paths(&blocks), vec!["a.txt"]);
    }
}
