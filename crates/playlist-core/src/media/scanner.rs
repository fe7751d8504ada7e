//! Recursive media directory scan

use super::classify::{has_problematic_chars, is_media_file};
use crate::config::ExtensionSet;
use anyhow::{Context, Result};
use std::path::Path;
use walkdir::WalkDir;

/// Result of scanning a media root
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaScan {
    /// Normalized media paths relative to the root, in walk order
    pub files: Vec<String>,

    /// File names (not paths) containing characters unsafe in `file://` URLs
    pub problematic: Vec<String>,
}

impl MediaScan {
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Walk `root` depth-first and collect every media file.
///
/// Entries within a directory are visited in file name order so the result
/// does not depend on the platform's directory listing order. The walk stops
/// at the first unreadable entry and nothing collected so far is returned.
pub fn scan(root: &Path, extensions: &ExtensionSet) -> Result<MediaScan> {
    let mut result = MediaScan::default();

    let walker = WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter();

    for entry in walker {
        let entry = entry.with_context(|| format!("Failed to scan {}", root.display()))?;

        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if !is_media_file(&name, extensions) {
            continue;
        }

        if has_problematic_chars(&name) && !result.problematic.iter().any(|p| *p == name) {
            result.problematic.push(name.to_string());
        }

        let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
        let relative = relative
            .to_str()
            .ok_or_else(|| anyhow::anyhow!("Path is not valid UTF-8: {}", entry.path().display()))?;
        result.files.push(normalize_path(relative));
    }

    Ok(result)
}

/// Replace the platform's directory separator with `/`
pub fn normalize_path(path: &str) -> String {
    if std::path::MAIN_SEPARATOR != '/' {
        path.replace(std::path::MAIN_SEPARATOR, "/")
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, b"").unwrap();
    }

    fn mp3_mp4() -> ExtensionSet {
        ExtensionSet::new([".mp3"], [".mp4"])
    }

    #[test]
    fn test_scan_nested_tree() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "a.mp3");
        touch(tmp.path(), "b.txt");
        touch(tmp.path(), "sub/c.mp4");

        let scan = scan(tmp.path(), &mp3_mp4()).unwrap();
        assert_eq!(scan.files, vec!["a.mp3", "sub/c.mp4"]);
        assert!(scan.problematic.is_empty());
    }

    #[test]
    fn test_scan_order_is_sorted_depth_first() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "z.mp4");
        touch(tmp.path(), "m/inner/deep.mp4");
        touch(tmp.path(), "m/b.mp3");
        touch(tmp.path(), "a.mp3");

        let scan = scan(tmp.path(), &mp3_mp4()).unwrap();
        assert_eq!(
            scan.files,
            vec!["a.mp3", "m/b.mp3", "m/inner/deep.mp4", "z.mp4"]
        );
    }

    #[test]
    fn test_scan_skips_directories_named_like_media() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("folder.mp4")).unwrap();
        touch(tmp.path(), "folder.mp4/real.mp4");

        let scan = scan(tmp.path(), &mp3_mp4()).unwrap();
        assert_eq!(scan.files, vec!["folder.mp4/real.mp4"]);
    }

    #[test]
    fn test_problematic_names_only_for_media() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "clip?.mp4");
        touch(tmp.path(), "notes#1.txt");
        touch(tmp.path(), "song.mp3");

        let scan = scan(tmp.path(), &mp3_mp4()).unwrap();
        assert_eq!(scan.files, vec!["clip?.mp4", "song.mp3"]);
        assert_eq!(scan.problematic, vec!["clip?.mp4"]);
    }

    #[test]
    fn test_problematic_name_listed_once() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "a/x&y.mp4");
        touch(tmp.path(), "b/x&y.mp4");

        let scan = scan(tmp.path(), &mp3_mp4()).unwrap();
        assert_eq!(scan.files.len(), 2);
        assert_eq!(scan.problematic, vec!["x&y.mp4"]);
    }

    #[test]
    fn test_empty_extension_set_finds_nothing() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "a.mp3");

        let scan = scan(tmp.path(), &ExtensionSet::empty()).unwrap();
        assert!(scan.is_empty());
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope");
        assert!(scan(&missing, &mp3_mp4()).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_broken_symlink_aborts_scan() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "a.mp3");
        std::os::unix::fs::symlink(tmp.path().join("gone.mp4"), tmp.path().join("link.mp4"))
            .unwrap();

        assert!(scan(tmp.path(), &mp3_mp4()).is_err());
    }

    #[test]
    fn test_normalize_path_keeps_forward_slashes() {
        assert_eq!(normalize_path("sub/dir/c.mp4"), "sub/dir/c.mp4");
    }
}
