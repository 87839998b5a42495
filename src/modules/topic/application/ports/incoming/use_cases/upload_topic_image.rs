use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::application::domain::entities::UserId;
use crate::topic::application::ports::outgoing::UploadedImage;

pub const UPLOAD_SUCCEEDED_MSG: &str = "上传成功";
pub const UPLOAD_FAILED_MSG: &str = "上传失败";

/// Payload the editor expects after an inline image upload.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct UploadImageResponse {
    #[schema(example = true)]
    pub success: bool,
    #[schema(example = "上传成功")]
    pub msg: String,
    #[schema(example = "http://localhost:8080/uploads/images/topics/202610/19/7_1760832000_a1b2c3d4e5.png")]
    pub file_path: String,
}

impl UploadImageResponse {
    pub fn failed() -> Self {
        Self {
            success: false,
            msg: UPLOAD_FAILED_MSG.to_string(),
            file_path: String::new(),
        }
    }

    pub fn succeeded(path: String) -> Self {
        Self {
            success: true,
            msg: UPLOAD_SUCCEEDED_MSG.to_string(),
            file_path: path,
        }
    }
}

/// Never fails: a rejected or missing file yields [`UploadImageResponse::failed`].
#[async_trait]
pub trait UploadTopicImageUseCase: Send + Sync {
    async fn execute(&self, file: Option<UploadedImage>, owner: UserId) -> UploadImageResponse;
}
