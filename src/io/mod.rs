use anyhow::{bail, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

pub mod local;

#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Persists `bytes` under a fresh, collision-free name derived from `original_filename`.
    async fn save(&self, original_filename: &str, bytes: &[u8]) -> Result<StoredImage>;

    // removing an image that is already gone is not an error
    async fn remove(&self, filename: &str) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredImage {
    // bare file name inside the store's root, e.g. "1718000000_suite.jpg"
    pub filename: String,
}

/// Last path component of a client supplied filename or a stored image url.
///
/// Both separators are honoured so "C:\\photos\\a.jpg" and "../../a.jpg" reduce to "a.jpg".
/// Returns `None` when nothing usable is left.
pub fn image_basename(name: &str) -> Option<String> {
    let last = name.rsplit(|c: char| c == '/' || c == '\\').next()?.trim();

    if last.is_empty() || last == "." || last == ".." {
        return None;
    }

    Some(last.to_string())
}

pub fn timestamped_filename(unix_seconds: i64, basename: &str) -> String {
    format!("{}_{}", unix_seconds, basename)
}

// ensure a stored filename can only ever point at a direct child of `root`
pub fn verify_filename(root: &Path, filename: &str) -> Result<PathBuf> {
    if filename.is_empty()
        || filename == "."
        || filename == ".."
        || filename.contains('/')
        || filename.contains('\\')
    {
        bail!("Refusing to touch {:?} outside of {}", filename, root.display());
    }

    Ok(root.join(filename))
}
