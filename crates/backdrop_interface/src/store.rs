//! Output store trait.

use async_trait::async_trait;
use backdrop_core::{GeneratedImage, StoredImage};
use backdrop_error::BackdropResult;

/// Persists generated backgrounds under deterministic names.
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Stores `image` as slide `slide_index` of trope `trope_id`.
    ///
    /// The same `(slide_index, trope_id)` always maps to the same location, so
    /// reruns overwrite instead of accumulating copies.
    async fn persist(
        &self,
        image: &GeneratedImage,
        slide_index: usize,
        trope_id: &str,
    ) -> BackdropResult<StoredImage>;

    /// Reads a stored background back by file name.
    async fn load(&self, file_name: &str) -> BackdropResult<Vec<u8>>;
}
