use actix_web::{get, web, Responder};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::topic::application::ports::incoming::use_cases::ListTopicsError;
use crate::topic::application::ports::outgoing::{PageResult, TopicOrder, TopicView};
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListTopicsQuery {
    /// `recent` for newest first; anything else sorts by last activity
    pub order: Option<String>,
    /// 1-based page number
    pub page: Option<u64>,
}

/// List topics
///
/// Thirty topics per page, newest activity first unless `order=recent`.
#[utoipa::path(
    get,
    path = "/api/topics",
    tag = "topics",
    params(ListTopicsQuery),
    responses(
        (status = 200, description = "A page of topics", body = inline(SuccessResponse<PageResult<TopicView>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/topics")]
pub async fn list_topics_handler(
    data: web::Data<AppState>,
    query: web::Query<ListTopicsQuery>,
) -> impl Responder {
    let query = query.into_inner();
    let order = TopicOrder::from_param(query.order.as_deref());
    let page = query.page.unwrap_or(1);

    match data.topic.list.execute(order, page).await {
        Ok(page) => ApiResponse::success(page),
        Err(ListTopicsError::QueryError(msg)) => {
            tracing::error!(error = %msg, "failed to list topics");
            ApiResponse::internal_error()
        }
    }
}
