//! Directory Scanner - Discovers markdown files and loads them as items.
//!
//! Discovery walks the directory recursively in file-name order so that the
//! compiled document is byte-identical across runs and filesystems. Items are
//! then ordered newest first by their `date`; undated items keep discovery
//! order after all dated ones.
//!
//! # Example
//!
//! ```ignore
//! use folio_scanner::ContentScanner;
//!
//! let scanner = ContentScanner::new();
//! let items = scanner.scan_all(Path::new("content/blog"))?;
//! ```

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use folio_types::ContentItem;
use rayon::prelude::*;
use walkdir::WalkDir;

use crate::content::loader::load_item;
use crate::error::ScanError;

/// File extensions treated as markdown (compared case-insensitively).
pub const MARKDOWN_EXTENSIONS: &[&str] = &["md", "markdown"];

/// Whether `path` has a markdown extension.
#[must_use]
pub fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            MARKDOWN_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

/// Scans content directories into `ContentItem`s.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentScanner;

impl ContentScanner {
    /// Create a new content scanner.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Load every markdown file under `dir`.
    ///
    /// A missing directory is not an error: it is logged and yields no items.
    /// Files that fail to load become placeholder items.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Walk`] only when `dir` exists but cannot be
    /// traversed at all.
    pub fn scan_all(&self, dir: &Path) -> Result<Vec<ContentItem>, ScanError> {
        if !dir.is_dir() {
            log::warn!("Directory {} does not exist", dir.display());
            return Ok(Vec::new());
        }

        let paths = self.discover(dir)?;
        let mut items: Vec<ContentItem> = paths.par_iter().map(|path| load_item(path)).collect();
        sort_newest_first(&mut items);

        log::info!(
            "Scanned {} markdown documents from {}",
            items.len(),
            dir.display()
        );
        Ok(items)
    }

    /// List markdown files under `dir`, sorted by file name at each level.
    ///
    /// Symlinks are followed, so linked files and directories are included.
    /// Unreadable entries and symlink loops are logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Walk`] when `dir` itself cannot be read.
    pub fn discover(&self, dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
        let mut paths = Vec::new();
        for entry in WalkDir::new(dir).follow_links(true).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(source) if source.depth() == 0 => {
                    return Err(ScanError::Walk {
                        path: dir.to_path_buf(),
                        source,
                    });
                }
                Err(err) => {
                    log::warn!("Skipping unreadable entry under {}: {err}", dir.display());
                    continue;
                }
            };
            if entry.file_type().is_file() && is_markdown(entry.path()) {
                paths.push(entry.into_path());
            }
        }
        Ok(paths)
    }
}

/// Leading `YYYY-MM-DD` of a date string, if it parses.
fn date_key(date: &str) -> Option<NaiveDate> {
    let date = date.trim();
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            date.get(..10)
                .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
        })
}

/// Stable sort, newest first; undated items last.
fn sort_newest_first(items: &mut [ContentItem]) {
    items.sort_by_key(|item| std::cmp::Reverse(date_key(&item.date)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::loader::PLACEHOLDER_TITLE;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, content: &[u8]) {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    #[test]
    fn test_scan_missing_directory() {
        let items = ContentScanner::new()
            .scan_all(Path::new("/does/not/exist"))
            .unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_scan_recurses_and_filters_extensions() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "a.md", b"---\ntitle: A\n---\nContent A");
        write(temp_dir.path(), "sub/b.MD", b"---\ntitle: B\n---\nContent B");
        write(temp_dir.path(), "sub/deeper/c.markdown", b"C");
        write(temp_dir.path(), "notes.txt", b"not markdown");

        let items = ContentScanner::new().scan_all(temp_dir.path()).unwrap();
        let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn test_scan_isolates_failures() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "bad.md", &[0xff, 0xfe, 0x00, 0x80]);
        write(temp_dir.path(), "good.md", b"---\ntitle: Good\n---\nok");

        let items = ContentScanner::new().scan_all(temp_dir.path()).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, "bad");
        assert_eq!(items[0].title, PLACEHOLDER_TITLE);
        assert_eq!(items[1].title, "Good");
    }

    #[test]
    fn test_scan_orders_newest_first() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "a-old.md", b"---\ndate: 2020-05-01\n---\n");
        write(temp_dir.path(), "b-undated.md", b"no date");
        write(temp_dir.path(), "c-new.md", b"---\ndate: 2024-02-10T08:00:00Z\n---\n");
        write(temp_dir.path(), "d-garbage.md", b"---\ndate: someday\n---\n");

        let items = ContentScanner::new().scan_all(temp_dir.path()).unwrap();
        let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["c-new", "a-old", "b-undated", "d-garbage"]);
    }

    #[test]
    fn test_scan_is_repeatable() {
        let temp_dir = TempDir::new().unwrap();
        for name in ["zeta.md", "alpha.md", "mid/beta.md", "gamma.md"] {
            write(temp_dir.path(), name, b"body");
        }
        let scanner = ContentScanner::new();
        let first = scanner.scan_all(temp_dir.path()).unwrap();
        let second = scanner.scan_all(temp_dir.path()).unwrap();
        assert_eq!(first, second);
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_follows_symlinks() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "real/shared.md", b"---\ntitle: Shared\n---\n");
        write(temp_dir.path(), "real/nested/deep.md", b"deep");
        write(temp_dir.path(), "blog/own.md", b"---\ntitle: Own\n---\n");
        std::os::unix::fs::symlink(
            temp_dir.path().join("real/shared.md"),
            temp_dir.path().join("blog/shared.md"),
        )
        .unwrap();
        std::os::unix::fs::symlink(
            temp_dir.path().join("real/nested"),
            temp_dir.path().join("blog/linked"),
        )
        .unwrap();

        let items = ContentScanner::new()
            .scan_all(&temp_dir.path().join("blog"))
            .unwrap();
        let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["deep", "own", "shared"]);
        assert_eq!(items[2].title, "Shared");
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_survives_symlink_loop() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "blog/post.md", b"body");
        std::os::unix::fs::symlink(
            temp_dir.path().join("blog"),
            temp_dir.path().join("blog/loop"),
        )
        .unwrap();

        let items = ContentScanner::new()
            .scan_all(&temp_dir.path().join("blog"))
            .unwrap();
        let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["post"]);
    }

    #[test]
    fn test_is_markdown() {
        assert!(is_markdown(Path::new("x.md")));
        assert!(is_markdown(Path::new("x.Markdown")));
        assert!(!is_markdown(Path::new("x.mdx")));
        assert!(!is_markdown(Path::new("md")));
    }

    #[test]
    fn test_date_key_prefix() {
        assert_eq!(
            date_key("2024-02-10T08:00:00Z"),
            NaiveDate::from_ymd_opt(2024, 2, 10)
        );
        assert_eq!(date_key(""), None);
        assert_eq!(date_key("someday"), None);
    }
}
