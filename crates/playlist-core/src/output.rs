//! Writing the generated page

use anyhow::{Context, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Write `html` to `path`, replacing any existing file.
///
/// The content goes to a sibling temporary file first and is renamed into
/// place, so `path` never holds a partially written page. The temporary file
/// is removed if anything fails.
pub async fn write_page(path: &Path, html: &str) -> Result<()> {
    let tmp_path = temp_path(path);

    let result = async {
        fs::write(&tmp_path, html)
            .await
            .with_context(|| format!("Failed to write file: {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path)
            .await
            .with_context(|| format!("Failed to replace file: {}", path.display()))
    }
    .await;

    if result.is_err() {
        let _ = fs::remove_file(&tmp_path).await;
    }

    result
}

/// Open the written page with the platform's default handler
pub fn open_page(path: &Path) -> Result<()> {
    open::that(path).with_context(|| format!("Failed to open {}", path.display()))
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(path.file_name().unwrap_or_default());
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_temp_path_is_hidden_sibling() {
        let tmp = temp_path(Path::new("/media/page.html"));
        assert_eq!(tmp, PathBuf::from("/media/.page.html.tmp"));
    }

    #[tokio::test]
    async fn test_write_page_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("page.html");
        std::fs::write(&path, "old content that is longer").unwrap();

        write_page(&path, "new").await.unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
        assert!(!temp_path(&path).exists());
    }

    #[tokio::test]
    async fn test_failed_write_leaves_nothing_behind() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing-dir").join("page.html");

        assert!(write_page(&path, "content").await.is_err());
        assert!(!path.exists());
        assert!(!temp_path(&path).exists());
    }

    #[tokio::test]
    async fn test_rename_failure_removes_temp_file() {
        let dir = TempDir::new().unwrap();
        // a non-empty directory at the destination cannot be replaced by a file
        let path = dir.path().join("page.html");
        std::fs::create_dir(&path).unwrap();
        std::fs::write(path.join("keep"), "x").unwrap();

        assert!(write_page(&path, "content").await.is_err());
        assert!(!temp_path(&path).exists());
        assert!(path.join("keep").exists());
    }
}
