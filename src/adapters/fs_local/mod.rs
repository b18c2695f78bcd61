// Local filesystem adapter - File system operations via tokio::fs

use std::io::ErrorKind;

use async_trait::async_trait;

use crate::error::ClipCutResult;
use crate::ports::*;

/// Local filesystem adapter
pub struct LocalFsAdapter;

impl LocalFsAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFsAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FsPort for LocalFsAdapter {
    async fn file_exists(&self, file_path: &str) -> ClipCutResult<bool> {
        match tokio::fs::metadata(file_path).await {
            Ok(metadata) => Ok(metadata.is_file()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete_file(&self, file_path: &str) -> ClipCutResult<()> {
        tokio::fs::remove_file(file_path).await?;
        tracing::debug!(path = file_path, "Deleted file");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_file_exists_and_delete() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("clip.mov");
        std::fs::write(&path, b"data").unwrap();
        let path_str = path.to_str().unwrap();

        let fs = LocalFsAdapter::new();
        assert!(fs.file_exists(path_str).await.unwrap());

        fs.delete_file(path_str).await.unwrap();
        assert!(!fs.file_exists(path_str).await.unwrap());
    }

    #[tokio::test]
    async fn test_directory_is_not_a_file() {
        let dir = TempDir::new().unwrap();
        let fs = LocalFsAdapter::new();
        assert!(!fs.file_exists(dir.path().to_str().unwrap()).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.mov");
        let fs = LocalFsAdapter::new();
        assert!(fs.delete_file(missing.to_str().unwrap()).await.is_err());
    }
}
