use std::path::{Path, PathBuf};

use chrono::Utc;
use thiserror::Error;
use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum MediaStoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Append-only file store for uploaded images.
///
/// Stored files are never deleted through this interface; entity rows hold a
/// reference to the file, not ownership of it.
pub struct MediaStore {
    uploads_dir: PathBuf,
    public_base_url: Option<String>,
}

impl MediaStore {
    pub fn new(data_dir: &Path, public_base_url: Option<String>) -> Self {
        Self {
            uploads_dir: data_dir.join("uploads"),
            public_base_url: public_base_url
                .map(|base| base.trim_end_matches('/').to_string()),
        }
    }

    #[must_use]
    pub fn uploads_dir(&self) -> &Path {
        &self.uploads_dir
    }

    /// Persists `data` under a fresh collision-resistant filename and returns
    /// the externally-resolvable reference for it.
    ///
    /// The filename is a millisecond timestamp plus a short random suffix
    /// plus the original extension; the suffix distinguishes uploads landing
    /// in the same millisecond.
    pub async fn store(&self, data: &[u8], original_name: &str) -> Result<String, MediaStoreError> {
        let filename = generate_filename(original_name);

        fs::create_dir_all(&self.uploads_dir).await?;

        let path = self.uploads_dir.join(&filename);
        let mut file = File::create(&path).await?;
        file.write_all(data).await?;
        file.sync_all().await?;

        Ok(self.reference(&filename))
    }

    /// Addressing rule: absolute URL under the public base when one is
    /// configured, root-relative path otherwise. Pure function of
    /// configuration, never of request state.
    fn reference(&self, filename: &str) -> String {
        match &self.public_base_url {
            Some(base) => format!("{base}/uploads/{filename}"),
            None => format!("/uploads/{filename}"),
        }
    }
}

fn generate_filename(original_name: &str) -> String {
    let timestamp = Utc::now().timestamp_millis();
    let suffix = Uuid::new_v4().simple().to_string();
    let ext = Path::new(original_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{e}"))
        .unwrap_or_default();
    format!("{timestamp}-{}{ext}", &suffix[..8])
}
