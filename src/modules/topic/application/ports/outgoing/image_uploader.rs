use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;

/// A file taken from the request, before any checks.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedImage {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Where a stored image can be fetched from.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredImage {
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ImageUploadError {
    #[error("File extension not allowed: {0}")]
    ExtensionNotAllowed(String),

    #[error("File content does not match an allowed image format")]
    InvalidImage,

    #[error("File exceeds {max_kb} KB")]
    TooLarge { max_kb: u64 },

    #[error("Storage error: {0}")]
    StorageError(String),
}

#[async_trait]
pub trait ImageUploader: Send + Sync {
    /// Stores `file` under `folder`, naming it after `owner`.
    async fn save(
        &self,
        file: UploadedImage,
        folder: &str,
        owner: UserId,
        max_size_kb: u64,
    ) -> Result<StoredImage, ImageUploadError>;
}
