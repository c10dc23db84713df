use crate::io::{image_basename, timestamped_filename, verify_filename, ImageStore, StoredImage};
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

pub struct LocalImageStore {
    pub root_path: PathBuf,
}

impl LocalImageStore {
    // creates the upload directory if it doesn't exist yet
    pub async fn new(root_path: impl Into<PathBuf>) -> Result<Self> {
        let root_path = root_path.into();
        fs::create_dir_all(&root_path).await.with_context(|| {
            format!("Failed to create upload directory {}", root_path.display())
        })?;

        Ok(Self { root_path })
    }
}

#[async_trait]
impl ImageStore for LocalImageStore {
    async fn save(&self, original_filename: &str, bytes: &[u8]) -> Result<StoredImage> {
        let basename = image_basename(original_filename)
            .ok_or_else(|| anyhow!("Unusable image filename {:?}", original_filename))?;

        // the directory may have been removed while we were running
        fs::create_dir_all(&self.root_path).await?;

        let now = Utc::now().timestamp();
        let filename = timestamped_filename(now, &basename);
        let path = verify_filename(&self.root_path, &filename)?;

        let filename = match write_new_file(&path, bytes).await {
            Ok(()) => filename,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                // same name uploaded twice within one second
                let filename = format!("{}_{:08x}_{}", now, rand::random::<u32>(), basename);
                debug!("{} already exists, storing as {}", path.display(), filename);
                let path = verify_filename(&self.root_path, &filename)?;
                write_new_file(&path, bytes)
                    .await
                    .with_context(|| format!("Failed to write image {}", path.display()))?;
                filename
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to write image {}", path.display()));
            }
        };

        info!("Stored image {} ({} bytes)", filename, bytes.len());
        Ok(StoredImage { filename })
    }

    async fn remove(&self, filename: &str) -> Result<()> {
        let path = verify_filename(&self.root_path, filename)?;

        match fs::remove_file(&path).await {
            Ok(()) => {
                info!("Deleted image {}", path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Image {} was already gone", path.display());
                Ok(())
            }
            Err(e) => Err(e).with_context(|| format!("Failed to delete image {}", path.display())),
        }
    }
}

// never overwrite: create_new fails with AlreadyExists instead
async fn write_new_file(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .await?;
    file.write_all(bytes).await?;
    file.flush().await
}
