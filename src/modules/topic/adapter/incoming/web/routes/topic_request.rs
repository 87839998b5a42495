use actix_web::{web::PathConfig, HttpResponse};
use serde::Deserialize;
use std::collections::BTreeMap;
use utoipa::ToSchema;

use crate::shared::api::ApiResponse;
use crate::topic::application::ports::incoming::use_cases::{TopicCommand, TopicCommandError};

pub const TOPICS_PATH: &str = "/api/topics";

pub const FLASH_CREATED: &str = "成功创建话题";
pub const FLASH_UPDATED: &str = "成功更新话题";
pub const FLASH_DELETED: &str = "成功删除话题";

const CATEGORY_REQUIRED: &str = "请选择分类";

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// Fields a client may set on a topic. Anything else in the body is ignored.
#[derive(Debug, Deserialize, ToSchema)]
pub struct TopicRequest {
    #[schema(example = "How do I pin a future?")]
    pub title: Option<String>,
    #[schema(example = "<p>I keep running into Unpin errors...</p>")]
    pub body: Option<String>,
    #[schema(example = 2)]
    pub category_id: Option<i64>,
}

impl TopicRequest {
    pub fn into_command(self) -> Result<TopicCommand, TopicCommandError> {
        TopicCommand::new(self.title, self.body, self.category_id)
    }
}

pub fn topic_location(topic_id: i64) -> String {
    format!("{}/{}", TOPICS_PATH, topic_id)
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

pub fn map_command_error(err: TopicCommandError) -> HttpResponse {
    let fields = err
        .fields
        .into_iter()
        .map(|(field, messages)| (field.to_string(), messages))
        .collect();

    ApiResponse::unprocessable_entity("VALIDATION_ERROR", "The given data was invalid", fields)
}

pub fn category_not_found() -> HttpResponse {
    let mut fields = BTreeMap::new();
    fields.insert(
        "category_id".to_string(),
        vec![CATEGORY_REQUIRED.to_string()],
    );

    ApiResponse::unprocessable_entity("VALIDATION_ERROR", "The given data was invalid", fields)
}

/// Topic ids that match `\d+` but overflow `i64` cannot exist.
pub fn topic_path_config() -> PathConfig {
    PathConfig::default().error_handler(|err, _req| {
        actix_web::error::InternalError::from_response(err, topic_not_found()).into()
    })
}

pub fn topic_not_found() -> HttpResponse {
    ApiResponse::not_found("TOPIC_NOT_FOUND", "Topic not found")
}

pub fn topic_forbidden() -> HttpResponse {
    ApiResponse::forbidden("FORBIDDEN", "This action is unauthorized")
}
