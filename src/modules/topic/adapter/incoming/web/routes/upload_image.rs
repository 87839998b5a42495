use actix_multipart::Multipart;
use actix_web::{post, web, HttpResponse, Responder};
use futures::StreamExt;
use utoipa::ToSchema;

use crate::{
    api::schemas::ErrorResponse,
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    topic::application::ports::incoming::use_cases::UploadImageResponse,
    topic::application::ports::outgoing::UploadedImage,
    AppState,
};

/// Multipart part carrying the image.
pub const UPLOAD_FIELD: &str = "upload_file";

/// Hard cap while reading the part; the uploader applies the real limit.
const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Multipart form accepted by the upload endpoint.
#[allow(dead_code)]
#[derive(ToSchema)]
pub struct UploadImageForm {
    #[schema(value_type = String, format = Binary)]
    upload_file: Vec<u8>,
}

/// Upload an inline topic image
///
/// Always answers 200 for signed-in users; check `success` in the body.
#[utoipa::path(
    post,
    path = "/api/topics/upload_image",
    tag = "topics",
    request_body(content = UploadImageForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Upload outcome", body = UploadImageResponse,
            example = json!({
                "success": true,
                "msg": "上传成功",
                "file_path": "http://localhost:8080/uploads/images/topics/202610/19/7_1760832000_a1b2c3d4e5.png"
            })
        ),
        (status = 401, description = "Not signed in", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/topics/upload_image")]
pub async fn upload_topic_image_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    payload: Multipart,
) -> impl Responder {
    let file = read_upload_file(payload).await;

    let response = data.topic.upload_image.execute(file, user.user_id).await;

    HttpResponse::Ok().json(response)
}

// A malformed body counts as "no file"
async fn read_upload_file(mut payload: Multipart) -> Option<UploadedImage> {
    while let Some(item) = payload.next().await {
        let mut field = match item {
            Ok(field) => field,
            Err(e) => {
                tracing::warn!(error = %e, "unreadable multipart body");
                return None;
            }
        };

        let file_name = match field.content_disposition() {
            Some(cd) if cd.get_name() == Some(UPLOAD_FIELD) => cd.get_filename().map(str::to_owned),
            _ => continue,
        };

        let Some(file_name) = file_name.filter(|name| !name.is_empty()) else {
            return None;
        };

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = match chunk {
                Ok(chunk) => chunk,
                Err(e) => {
                    tracing::warn!(error = %e, "multipart stream aborted");
                    return None;
                }
            };

            if bytes.len() + chunk.len() > MAX_UPLOAD_BYTES {
                tracing::warn!(file_name = %file_name, "upload exceeds read limit");
                return None;
            }
            bytes.extend_from_slice(&chunk);
        }

        if bytes.is_empty() {
            return None;
        }

        return Some(UploadedImage { file_name, bytes });
    }

    None
}
