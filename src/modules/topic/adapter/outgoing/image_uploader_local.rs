use async_trait::async_trait;
use chrono::Utc;
use rand::{distributions::Alphanumeric, Rng};
use std::env;
use std::path::PathBuf;

use crate::auth::application::domain::entities::UserId;
use crate::modules::topic::application::ports::outgoing::{
    ImageUploadError, ImageUploader, StoredImage, UploadedImage,
};

const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif"];
const DEFAULT_EXTENSION: &str = "png";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ImageFormat {
    Png,
    Jpeg,
    Gif,
}

impl ImageFormat {
    fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "png" => Some(Self::Png),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "gif" => Some(Self::Gif),
            _ => None,
        }
    }
}

fn detect_format(bytes: &[u8]) -> Option<ImageFormat> {
    // PNG: 89 50 4E 47 0D 0A 1A 0A
    if bytes.len() >= 8 && &bytes[..8] == b"\x89PNG\r\n\x1a\n" {
        return Some(ImageFormat::Png);
    }
    // JPEG: FF D8 FF
    if bytes.len() >= 3 && bytes[..3] == [0xFF, 0xD8, 0xFF] {
        return Some(ImageFormat::Jpeg);
    }
    // GIF87a / GIF89a
    if bytes.len() >= 6 && (&bytes[..6] == b"GIF87a" || &bytes[..6] == b"GIF89a") {
        return Some(ImageFormat::Gif);
    }
    None
}

// Pasted images often arrive without an extension
fn extension_of(file_name: &str) -> String {
    match file_name.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => ext.to_ascii_lowercase(),
        _ => DEFAULT_EXTENSION.to_string(),
    }
}

#[derive(Debug, Clone)]
pub struct ImageUploadConfig {
    pub upload_root: PathBuf,
    pub public_base_url: String,
}

impl ImageUploadConfig {
    /// `UPLOAD_ROOT` defaults to `public/uploads`, `APP_URL` to `http://localhost:8080`.
    pub fn from_env() -> Self {
        let upload_root = env::var("UPLOAD_ROOT")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| "public/uploads".to_string());

        let public_base_url = env::var("APP_URL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| "http://localhost:8080".to_string());

        Self {
            upload_root: PathBuf::from(upload_root),
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
        }
    }
}

/// Writes topic images to local disk under a dated folder.
#[derive(Debug, Clone)]
pub struct LocalImageUploader {
    config: ImageUploadConfig,
}

impl LocalImageUploader {
    pub fn new(config: ImageUploadConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ImageUploader for LocalImageUploader {
    async fn save(
        &self,
        file: UploadedImage,
        folder: &str,
        owner: UserId,
        max_size_kb: u64,
    ) -> Result<StoredImage, ImageUploadError> {
        let extension = extension_of(&file.file_name);
        if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
            return Err(ImageUploadError::ExtensionNotAllowed(extension));
        }

        if file.bytes.len() as u64 > max_size_kb * 1024 {
            return Err(ImageUploadError::TooLarge {
                max_kb: max_size_kb,
            });
        }

        if detect_format(&file.bytes) != ImageFormat::from_extension(&extension) {
            return Err(ImageUploadError::InvalidImage);
        }

        let now = Utc::now();
        let relative_dir = format!(
            "images/{}/{}/{}",
            folder,
            now.format("%Y%m"),
            now.format("%d")
        );

        let suffix: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(10)
            .map(char::from)
            .collect();
        let file_name = format!("{}_{}_{}.{}", owner, now.timestamp(), suffix, extension);

        let dir = self.config.upload_root.join(&relative_dir);
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| ImageUploadError::StorageError(e.to_string()))?;

        tokio::fs::write(dir.join(&file_name), &file.bytes)
            .await
            .map_err(|e| ImageUploadError::StorageError(e.to_string()))?;

        tracing::info!(owner = %owner, folder, file = %file_name, "image stored");

        Ok(StoredImage {
            path: format!(
                "{}/uploads/{}/{}",
                self.config.public_base_url, relative_dir, file_name
            ),
        })
    }
}
