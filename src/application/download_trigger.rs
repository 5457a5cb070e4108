use std::path::PathBuf;

use bytes::Bytes;
use tokio::io::AsyncWriteExt;

use crate::domain::{AppError, AudioFormat};

pub const DEFAULT_OUTPUT_PREFIX: &str = "converted-";

/// Output file produced in place of a real transcoded artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderArtifact {
    pub file_name: String,
    pub media_type: String,
    pub payload: Bytes,
}

#[derive(Debug, Clone)]
pub struct DownloadTrigger {
    prefix: String,
}

impl Default for DownloadTrigger {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_PREFIX)
    }
}

impl DownloadTrigger {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Builds `<prefix><file_name_hint>.<ext>` with an empty payload.
    pub fn prepare(&self, file_name_hint: &str, format: AudioFormat) -> PlaceholderArtifact {
        PlaceholderArtifact {
            file_name: format!("{}{}.{}", self.prefix, file_name_hint, format.extension()),
            media_type: format.media_type(),
            payload: Bytes::new(),
        }
    }

    pub async fn choose_save_path(suggested_filename: String) -> Option<PathBuf> {
        rfd::AsyncFileDialog::new()
            .set_file_name(&suggested_filename)
            .save_file()
            .await
            .map(|handle| handle.path().to_path_buf())
    }

    /// Writes the artifact to `path`, replacing anything already there.
    pub async fn save(artifact: PlaceholderArtifact, path: PathBuf) -> Result<PathBuf, AppError> {
        let mut file = tokio::fs::File::create(&path)
            .await
            .map_err(|e| AppError::Io(format!("Failed to create file: {}", e)))?;

        file.write_all(&artifact.payload)
            .await
            .map_err(|e| AppError::Io(format!("Write error: {}", e)))?;

        file.sync_all()
            .await
            .map_err(|e| AppError::Io(format!("Failed to sync file: {}", e)))?;

        tracing::info!(
            "Saved {} ({}) to {}",
            artifact.file_name,
            artifact.media_type,
            path.display()
        );
        Ok(path)
    }
}
