use async_trait::async_trait;

use crate::topic::application::ports::outgoing::TopicView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ShowTopicError {
    #[error("Topic not found")]
    NotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait ShowTopicUseCase: Send + Sync {
    async fn execute(&self, topic_id: i64) -> Result<TopicView, ShowTopicError>;
}
