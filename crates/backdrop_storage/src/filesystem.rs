//! Filesystem-backed output store.

use crate::naming::{output_file_name, validate_file_name};
use async_trait::async_trait;
use backdrop_core::{GeneratedImage, StoredImage};
use backdrop_error::{BackdropResult, WriteError, WriteErrorKind};
use backdrop_interface::ImageStore;
use derive_getters::Getters;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::{debug, info, instrument};

/// Writes backgrounds into a single output directory and serves them back
/// under a URL prefix.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct FilesystemStore {
    /// Directory holding generated files
    output_dir: PathBuf,
    /// URL prefix the directory is served under, e.g. `/outputs`
    url_prefix: String,
}

impl FilesystemStore {
    /// Creates a store. The directory is created lazily on first write.
    pub fn new(output_dir: impl Into<PathBuf>, url_prefix: impl Into<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
            url_prefix: url_prefix.into(),
        }
    }

    /// URL a stored file is served under.
    pub fn url_for(&self, file_name: &str) -> String {
        format!("{}/{}", self.url_prefix.trim_end_matches('/'), file_name)
    }
}

#[async_trait]
impl ImageStore for FilesystemStore {
    #[instrument(skip(self, image), fields(bytes = image.png().len()))]
    async fn persist(
        &self,
        image: &GeneratedImage,
        slide_index: usize,
        trope_id: &str,
    ) -> BackdropResult<StoredImage> {
        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|e| {
                WriteError::new(WriteErrorKind::CreateDir {
                    path: self.output_dir.display().to_string(),
                    message: e.to_string(),
                })
            })?;

        let file_name = output_file_name(slide_index, trope_id);
        let path = self.output_dir.join(&file_name);

        tokio::fs::write(&path, image.png()).await.map_err(|e| {
            WriteError::new(WriteErrorKind::Write {
                path: path.display().to_string(),
                message: e.to_string(),
            })
        })?;

        info!(path = %path.display(), "Saved background");
        let url = self.url_for(&file_name);
        Ok(StoredImage::new(file_name, path, url))
    }

    #[instrument(skip(self))]
    async fn load(&self, file_name: &str) -> BackdropResult<Vec<u8>> {
        validate_file_name(file_name)?;
        let path = self.output_dir.join(file_name);

        let bytes = tokio::fs::read(&path).await.map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                WriteError::new(WriteErrorKind::NotFound(file_name.to_string()))
            } else {
                WriteError::new(WriteErrorKind::Read {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })
            }
        })?;

        debug!(bytes = bytes.len(), "Loaded stored background");
        Ok(bytes)
    }
}
