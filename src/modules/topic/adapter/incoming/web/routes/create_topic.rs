use actix_web::{post, web, Responder};

use crate::{
    api::schemas::{ErrorResponse, RedirectResponse},
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    shared::api::ApiResponse,
    topic::application::ports::incoming::use_cases::CreateTopicError,
    AppState,
};

use super::topic_request::{
    category_not_found, map_command_error, topic_location, TopicRequest, FLASH_CREATED,
};

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Create a topic
///
/// Redirects to the new topic on success.
#[utoipa::path(
    post,
    path = "/api/topics",
    tag = "topics",
    request_body = TopicRequest,
    responses(
        (status = 303, description = "Created; Location points at the topic", body = RedirectResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/topics")]
pub async fn create_topic_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    payload: web::Json<TopicRequest>,
) -> impl Responder {
    let command = match payload.into_inner().into_command() {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.topic.create.execute(user.user_id, command).await {
        Ok(topic) => ApiResponse::redirect_with_flash(&topic_location(topic.id), FLASH_CREATED),
        Err(err) => map_create_topic_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_create_topic_error(err: CreateTopicError) -> actix_web::HttpResponse {
    match err {
        CreateTopicError::CategoryNotFound => category_not_found(),
        CreateTopicError::RepositoryError(msg) => {
            tracing::error!(error = %msg, "failed to create topic");
            ApiResponse::internal_error()
        }
    }
}
