use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::Result;
use tokio::fs;
use tracing::debug;

/// Blob storage backed by one file per key. Fills the role browser
/// storage plays for a page-hosted widget: one durable slot per key.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self { dir: dir.as_ref().to_path_buf() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// Read the blob stored under `key`. A missing file is `None`.
    pub async fn read(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)).await {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    /// Overwrite the blob stored under `key`, creating the storage
    /// directory on first write.
    pub async fn write(&self, key: &str, blob: &str) -> Result<()> {
        fs::create_dir_all(&self.dir).await?;
        let path = self.path_for(key);
        debug!("writing {} bytes to {}", blob.len(), path.display());
        fs::write(path, blob.as_bytes()).await?;
        Ok(())
    }

    /// Remove the blob stored under `key`. An absent key is nothing to
    /// delete, not an error.
    pub async fn remove(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.path_for(key)).await {
            Ok(_) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
