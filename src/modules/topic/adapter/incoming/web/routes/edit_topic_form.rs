use actix_web::{get, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::topic::application::ports::incoming::use_cases::{EditTopicFormError, TopicForm};
use crate::AppState;

use super::topic_request::{topic_forbidden, topic_not_found};

/// Data for the edit-topic form
#[utoipa::path(
    get,
    path = "/api/topics/{topic_id}/edit",
    tag = "topics",
    params(("topic_id" = i64, Path, description = "Topic id")),
    responses(
        (status = 200, description = "Form prefilled with the topic", body = inline(SuccessResponse<TopicForm>)),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 403, description = "Not the author", body = ErrorResponse),
        (status = 404, description = "Topic not found", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[get("/api/topics/{topic_id:\\d+}/edit")]
pub async fn edit_topic_form_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<i64>,
) -> impl Responder {
    let topic_id = path.into_inner();

    match data.topic.edit_form.execute(user.user_id, topic_id).await {
        Ok(form) => ApiResponse::success(form),
        Err(EditTopicFormError::NotFound) => topic_not_found(),
        Err(EditTopicFormError::Forbidden) => topic_forbidden(),
        Err(EditTopicFormError::QueryError(msg)) => {
            tracing::error!(topic_id, error = %msg, "failed to build edit form");
            ApiResponse::internal_error()
        }
    }
}
