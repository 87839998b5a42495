use async_trait::async_trait;
use serde::Serialize;

use crate::auth::application::domain::entities::UserId;

// Input DTO for creating a topic
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTopicData {
    pub owner: UserId,
    pub title: String,
    pub body: String,
    pub excerpt: String,
    pub category_id: i64,
}

// Only the user-editable columns; ownership never changes
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateTopicData {
    pub title: String,
    pub body: String,
    pub excerpt: String,
    pub category_id: i64,
}

// Persisted state after a write
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopicResult {
    pub id: i64,
    pub owner: UserId,
    pub title: String,
    pub category_id: i64,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TopicRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Topic not found")]
    NotFound,
}

#[async_trait]
pub trait TopicRepository: Send + Sync {
    async fn create_topic(&self, data: CreateTopicData)
        -> Result<TopicResult, TopicRepositoryError>;

    async fn update_topic(
        &self,
        topic_id: i64,
        data: UpdateTopicData,
    ) -> Result<TopicResult, TopicRepositoryError>;

    async fn delete_topic(&self, topic_id: i64) -> Result<(), TopicRepositoryError>;
}
