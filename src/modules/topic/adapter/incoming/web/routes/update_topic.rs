use actix_web::{route, web, Responder};

use crate::{
    api::schemas::{ErrorResponse, RedirectResponse},
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    shared::api::ApiResponse,
    topic::application::ports::incoming::use_cases::UpdateTopicError,
    AppState,
};

use super::topic_request::{
    category_not_found, map_command_error, topic_forbidden, topic_location, topic_not_found,
    TopicRequest, FLASH_UPDATED,
};

/// Update a topic
///
/// Only the author may update. Accepts PUT and PATCH.
#[utoipa::path(
    put,
    path = "/api/topics/{topic_id}",
    tag = "topics",
    params(("topic_id" = i64, Path, description = "Topic id")),
    request_body = TopicRequest,
    responses(
        (status = 303, description = "Updated; Location points at the topic", body = RedirectResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 403, description = "Not the author", body = ErrorResponse),
        (status = 404, description = "Topic not found", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[route("/api/topics/{topic_id:\\d+}", method = "PUT", method = "PATCH")]
pub async fn update_topic_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<i64>,
    payload: web::Json<TopicRequest>,
) -> impl Responder {
    let topic_id = path.into_inner();

    let command = match payload.into_inner().into_command() {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data
        .topic
        .update
        .execute(user.user_id, topic_id, command)
        .await
    {
        Ok(topic) => ApiResponse::redirect_with_flash(&topic_location(topic.id), FLASH_UPDATED),
        Err(err) => map_update_topic_error(topic_id, err),
    }
}

fn map_update_topic_error(topic_id: i64, err: UpdateTopicError) -> actix_web::HttpResponse {
    match err {
        UpdateTopicError::NotFound => topic_not_found(),
        UpdateTopicError::Forbidden => topic_forbidden(),
        UpdateTopicError::CategoryNotFound => category_not_found(),
        UpdateTopicError::RepositoryError(msg) => {
            tracing::error!(topic_id, error = %msg, "failed to update topic");
            ApiResponse::internal_error()
        }
    }
}
