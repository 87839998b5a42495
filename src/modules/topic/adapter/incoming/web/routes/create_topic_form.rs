use actix_web::{get, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::topic::application::ports::incoming::use_cases::{TopicForm, TopicFormError};
use crate::AppState;

/// Data for the new-topic form
#[utoipa::path(
    get,
    path = "/api/topics/create",
    tag = "topics",
    responses(
        (status = 200, description = "Blank form with categories", body = inline(SuccessResponse<TopicForm>)),
        (status = 401, description = "Not signed in", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[get("/api/topics/create")]
pub async fn create_topic_form_handler(
    _user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.topic.create_form.execute().await {
        Ok(form) => ApiResponse::success(form),
        Err(TopicFormError::QueryError(msg)) => {
            tracing::error!(error = %msg, "failed to build topic form");
            ApiResponse::internal_error()
        }
    }
}
