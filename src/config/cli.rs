use crate::domain::ports::Storage;
use crate::utils::error::Result;
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

/// Filesystem storage rooted at the inventory working directory.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        Path::new(&self.base_path).join(path)
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        Ok(tokio::fs::read(self.resolve(path)).await?)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.resolve(path);

        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(full_path, data).await?;
        Ok(())
    }

    async fn exists(&self, path: &str) -> bool {
        tokio::fs::try_exists(self.resolve(path)).await.unwrap_or(false)
    }

    async fn list_files(&self, dir: &str) -> Result<Vec<String>> {
        let full_path = self.resolve(dir);
        if !tokio::fs::try_exists(&full_path).await.unwrap_or(false) {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        let mut entries = tokio::fs::read_dir(full_path).await?;
        while let Some(entry) = entries.next_entry().await? {
            if entry.file_type().await?.is_file() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        Ok(names)
    }

    async fn modified(&self, path: &str) -> Option<DateTime<Local>> {
        let metadata = tokio::fs::metadata(self.resolve(path)).await.ok()?;
        metadata.modified().ok().map(DateTime::<Local>::from)
    }
}
