use actix_web::{get, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::topic::application::ports::incoming::use_cases::ShowTopicError;
use crate::topic::application::ports::outgoing::TopicView;
use crate::AppState;

use super::topic_request::topic_not_found;

/// Show a topic
#[utoipa::path(
    get,
    path = "/api/topics/{topic_id}",
    tag = "topics",
    params(("topic_id" = i64, Path, description = "Topic id")),
    responses(
        (status = 200, description = "The topic", body = inline(SuccessResponse<TopicView>)),
        (status = 404, description = "Topic not found", body = ErrorResponse)
    )
)]
#[get("/api/topics/{topic_id:\\d+}")]
pub async fn show_topic_handler(data: web::Data<AppState>, path: web::Path<i64>) -> impl Responder {
    let topic_id = path.into_inner();

    match data.topic.show.execute(topic_id).await {
        Ok(topic) => ApiResponse::success(topic),
        Err(ShowTopicError::NotFound) => topic_not_found(),
        Err(ShowTopicError::QueryError(msg)) => {
            tracing::error!(topic_id, error = %msg, "failed to load topic");
            ApiResponse::internal_error()
        }
    }
}
