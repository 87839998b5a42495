// src/api/schemas.rs
use serde::Serialize;
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Standard success response wrapper
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    /// Always true for successful responses
    #[schema(example = true)]
    pub success: bool,
    /// Response data
    pub data: T,
}

/// Standard error response wrapper
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always false for error responses
    #[schema(example = false)]
    pub success: bool,
    /// Error details
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Error code for programmatic handling
    #[schema(example = "VALIDATION_ERROR")]
    pub code: String,

    /// Human-readable error message
    #[schema(example = "The given data was invalid")]
    pub message: String,

    /// Per-field messages, only present on validation errors
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = json!({ "title": ["标题不能为空"] }))]
    pub fields: Option<BTreeMap<String, Vec<String>>>,
}

/// Body sent with a 303 See Other
#[derive(Serialize, ToSchema)]
pub struct RedirectResponse {
    #[schema(example = true)]
    pub success: bool,
    pub data: RedirectData,
}

#[derive(Serialize, ToSchema)]
pub struct RedirectData {
    /// Same value as the Location header
    #[schema(example = "/api/topics/11")]
    pub redirect_to: String,

    /// Flash message to show once on the next page
    #[schema(example = "成功创建话题")]
    pub message: String,
}
