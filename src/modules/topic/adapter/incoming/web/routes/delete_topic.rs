use actix_web::{delete, web, Responder};

use crate::{
    api::schemas::{ErrorResponse, RedirectResponse},
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    shared::api::ApiResponse,
    topic::application::ports::incoming::use_cases::DeleteTopicError,
    AppState,
};

use super::topic_request::{topic_forbidden, topic_not_found, FLASH_DELETED, TOPICS_PATH};

/// Delete a topic
#[utoipa::path(
    delete,
    path = "/api/topics/{topic_id}",
    tag = "topics",
    params(("topic_id" = i64, Path, description = "Topic id")),
    responses(
        (status = 303, description = "Deleted; Location points at the topic list", body = RedirectResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 403, description = "Not the author", body = ErrorResponse),
        (status = 404, description = "Topic not found", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[delete("/api/topics/{topic_id:\\d+}")]
pub async fn delete_topic_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<i64>,
) -> impl Responder {
    let topic_id = path.into_inner();

    match data.topic.delete.execute(user.user_id, topic_id).await {
        Ok(()) => ApiResponse::redirect_with_flash(TOPICS_PATH, FLASH_DELETED),
        Err(DeleteTopicError::NotFound) => topic_not_found(),
        Err(DeleteTopicError::Forbidden) => topic_forbidden(),
        Err(DeleteTopicError::RepositoryError(msg)) => {
            tracing::error!(topic_id, error = %msg, "failed to delete topic");
            ApiResponse::internal_error()
        }
    }
}
