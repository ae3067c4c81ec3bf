//! Local filesystem mirror of the datalake.
//!
//! Thin writer rooted at the configured data directory. Writes overwrite
//! whole files; there is no atomic-write guarantee, filesystem errors simply
//! surface.

use std::path::PathBuf;

use crate::error::{AppError, Result};

/// Local file store rooted at a directory.
#[derive(Clone)]
pub struct LocalStore {
    root_dir: PathBuf,
}

impl LocalStore {
    /// Create a new LocalStore rooted at the given directory.
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
        }
    }

    /// Get the full path for a relative key.
    pub fn path(&self, key: &str) -> PathBuf {
        self.root_dir.join(key)
    }

    /// Ensure parent directory exists.
    async fn ensure_dir(&self, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        Ok(())
    }

    /// Write text to a relative key, overwriting any existing file.
    pub async fn write_text(&self, key: &str, body: &str) -> Result<PathBuf> {
        let path = self.path(key);
        self.ensure_dir(&path).await?;
        tokio::fs::write(&path, body.as_bytes()).await?;
        Ok(path)
    }

    /// Read text back from a relative key.
    pub async fn read_text(&self, key: &str) -> Result<String> {
        let path = self.path(key);
        match tokio::fs::read_to_string(&path).await {
            Ok(body) => Ok(body),
            Err(e) => Err(AppError::Io(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn write_then_read_is_byte_identical() {
        let tmp = TempDir::new().unwrap();
        let store = LocalStore::new(tmp.path());

        let body = "{\"items\": []}\nsecond line\n";
        store.write_text("raw-views/raw-views-2023-10-21.txt", body)
            .await
            .unwrap();

        let read = store
            .read_text("raw-views/raw-views-2023-10-21.txt")
            .await
            .unwrap();
        assert_eq!(read, body);
    }

    #[tokio::test]
    async fn write_creates_missing_directories() {
        let tmp = TempDir::new().unwrap();
        let store = LocalStore::new(tmp.path().join("data"));

        let path = store.write_text("views/views-2023-10-21.json", "{}\n").await.unwrap();
        assert!(path.exists());
        assert!(path.ends_with("views/views-2023-10-21.json"));
    }

    #[tokio::test]
    async fn write_overwrites_existing_file() {
        let tmp = TempDir::new().unwrap();
        let store = LocalStore::new(tmp.path());

        store.write_text("f.txt", "old").await.unwrap();
        store.write_text("f.txt", "new").await.unwrap();

        assert_eq!(store.read_text("f.txt").await.unwrap(), "new");
    }

    #[tokio::test]
    async fn read_missing_file_errors() {
        let tmp = TempDir::new().unwrap();
        let store = LocalStore::new(tmp.path());

        assert!(store.read_text("nope.txt").await.is_err());
    }
}
