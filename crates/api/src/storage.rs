//! Uploaded-file storage rooted at a configured directory.
//!
//! Files are written under `{root}/{brand_id}/{file_uuid}.{ext}` and
//! addressed everywhere else by their root-relative path, so the root can
//! move between environments without touching database rows.

use std::path::{Path, PathBuf};

use uuid::Uuid;

use framenote_core::types::DbId;

/// Fallback extension when the client filename has none we accept.
const DEFAULT_EXTENSION: &str = "mp4";

/// Local filesystem store for uploaded videos.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Write an uploaded file, returning its root-relative path.
    pub async fn store(
        &self,
        brand_id: DbId,
        file_id: Uuid,
        original_filename: Option<&str>,
        bytes: &[u8],
    ) -> std::io::Result<String> {
        let ext = extension_for(original_filename);
        let relative = format!("{brand_id}/{file_id}.{ext}");
        let absolute = self.root.join(&relative);

        if let Some(parent) = absolute.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&absolute, bytes).await?;

        Ok(relative)
    }

    /// Remove a stored file. Used as compensating cleanup when the video
    /// record insert fails after the file write succeeded.
    pub async fn remove(&self, relative: &str) -> std::io::Result<()> {
        tokio::fs::remove_file(self.root.join(relative)).await
    }

    /// Resolve a root-relative path to an absolute one for serving.
    pub fn absolute(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }
}

/// Extract a safe extension from the client-supplied filename.
///
/// Only short alphanumeric extensions are kept; anything else falls back
/// to the default so client input never shapes the on-disk layout.
fn extension_for(original_filename: Option<&str>) -> String {
    original_filename
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .filter(|ext| {
            !ext.is_empty() && ext.len() <= 8 && ext.chars().all(|c| c.is_ascii_alphanumeric())
        })
        .unwrap_or_else(|| DEFAULT_EXTENSION.to_string())
}

/// Guess a Content-Type from a file extension.
pub fn content_type_for_extension(path: &str) -> &'static str {
    let ext = path.rsplit('.').next().unwrap_or("").to_lowercase();
    match ext.as_str() {
        "mp4" | "m4v" => "video/mp4",
        "webm" => "video/webm",
        "mov" => "video/quicktime",
        "mkv" => "video/x-matroska",
        "avi" => "video/x-msvideo",
        _ => "application/octet-stream",
    }
}
