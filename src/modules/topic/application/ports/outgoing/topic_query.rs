use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::application::domain::entities::UserId;
use crate::modules::category::application::ports::outgoing::CategoryItem;

/// Read model of a topic, joined with its category.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct TopicView {
    #[schema(example = 42)]
    pub id: i64,
    #[schema(example = "How do I pin a future?")]
    pub title: String,
    pub body: String,
    pub excerpt: Option<String>,
    #[schema(value_type = i64, example = 7)]
    pub user_id: UserId,
    pub category_id: i64,
    pub category: Option<CategoryItem>,
    pub reply_count: i32,
    pub view_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Sort order for the topic list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TopicOrder {
    /// Newest topics first.
    Recent,
    /// Most recently touched topics first.
    #[default]
    RecentReplied,
}

impl TopicOrder {
    /// Unknown or missing values fall back to the default order.
    pub fn from_param(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("recent") => TopicOrder::Recent,
            _ => TopicOrder::RecentReplied,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub per_page: u64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TopicQueryError {
    #[error("Topic not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait TopicQuery: Send + Sync {
    async fn list(
        &self,
        order: TopicOrder,
        page: PageRequest,
    ) -> Result<PageResult<TopicView>, TopicQueryError>;

    async fn get_by_id(&self, topic_id: i64) -> Result<TopicView, TopicQueryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_param_parsing() {
        assert_eq!(TopicOrder::from_param(Some("recent")), TopicOrder::Recent);
        assert_eq!(
            TopicOrder::from_param(Some("recent_replied")),
            TopicOrder::RecentReplied
        );
        assert_eq!(
            TopicOrder::from_param(Some("bogus")),
            TopicOrder::RecentReplied
        );
        assert_eq!(TopicOrder::from_param(None), TopicOrder::RecentReplied);
    }
}
