use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::topic::application::ports::incoming::use_cases::{
    UploadImageResponse, UploadTopicImageUseCase,
};
use crate::topic::application::ports::outgoing::{ImageUploader, UploadedImage};

pub const TOPIC_IMAGE_FOLDER: &str = "topics";
pub const TOPIC_IMAGE_MAX_KB: u64 = 1024;

pub struct UploadTopicImageService<U>
where
    U: ImageUploader,
{
    uploader: U,
}

impl<U> UploadTopicImageService<U>
where
    U: ImageUploader,
{
    pub fn new(uploader: U) -> Self {
        Self { uploader }
    }
}

#[async_trait]
impl<U> UploadTopicImageUseCase for UploadTopicImageService<U>
where
    U: ImageUploader + Send + Sync,
{
    async fn execute(&self, file: Option<UploadedImage>, owner: UserId) -> UploadImageResponse {
        let Some(file) = file else {
            return UploadImageResponse::failed();
        };

        match self
            .uploader
            .save(file, TOPIC_IMAGE_FOLDER, owner, TOPIC_IMAGE_MAX_KB)
            .await
        {
            Ok(stored) => UploadImageResponse::succeeded(stored.path),
            Err(err) => {
                tracing::warn!(owner = %owner, error = %err, "topic image rejected");
                UploadImageResponse::failed()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use crate::topic::application::ports::outgoing::{ImageUploadError, StoredImage};

    struct CountingUploader {
        result: Result<StoredImage, ImageUploadError>,
        calls: AtomicUsize,
        last_args: Mutex<Option<(String, UserId, u64)>>,
    }

    impl CountingUploader {
        fn returning(result: Result<StoredImage, ImageUploadError>) -> Self {
            Self {
                result,
                calls: AtomicUsize::new(0),
                last_args: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl ImageUploader for CountingUploader {
        async fn save(
            &self,
            _file: UploadedImage,
            folder: &str,
            owner: UserId,
            max_size_kb: u64,
        ) -> Result<StoredImage, ImageUploadError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_args.lock().unwrap() = Some((folder.to_string(), owner, max_size_kb));
            self.result.clone()
        }
    }

    fn png() -> UploadedImage {
        UploadedImage {
            file_name: "a.png".to_string(),
            bytes: vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A],
        }
    }

    #[tokio::test]
    async fn missing_file_fails_without_calling_uploader() {
        let service = UploadTopicImageService::new(CountingUploader::returning(Ok(StoredImage {
            path: "/x.png".to_string(),
        })));

        let response = service.execute(None, UserId::from(7)).await;

        assert_eq!(response, UploadImageResponse::failed());
        assert_eq!(response.msg, "上传失败");
        assert_eq!(response.file_path, "");
        assert_eq!(service.uploader.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn stored_file_returns_its_path() {
        let service = UploadTopicImageService::new(CountingUploader::returning(Ok(StoredImage {
            path: "http://localhost:8080/uploads/images/topics/202610/19/7_1_abc.png".to_string(),
        })));

        let response = service.execute(Some(png()), UserId::from(7)).await;

        assert!(response.success);
        assert_eq!(response.msg, "上传成功");
        assert_eq!(
            response.file_path,
            "http://localhost:8080/uploads/images/topics/202610/19/7_1_abc.png"
        );
        assert_eq!(service.uploader.calls.load(Ordering::SeqCst), 1);
        assert_eq!(
            *service.uploader.last_args.lock().unwrap(),
            Some(("topics".to_string(), UserId::from(7), 1024))
        );
    }

    #[tokio::test]
    async fn rejected_file_yields_failure_payload() {
        let service = UploadTopicImageService::new(CountingUploader::returning(Err(
            ImageUploadError::ExtensionNotAllowed("exe".to_string()),
        )));

        let response = service.execute(Some(png()), UserId::from(7)).await;

        assert_eq!(response, UploadImageResponse::failed());
        assert_eq!(service.uploader.calls.load(Ordering::SeqCst), 1);
    }
}
