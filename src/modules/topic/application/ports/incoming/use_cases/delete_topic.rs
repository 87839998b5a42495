use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteTopicError {
    #[error("Topic not found")]
    NotFound,

    #[error("Not allowed to delete this topic")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteTopicUseCase: Send + Sync {
    async fn execute(&self, actor: UserId, topic_id: i64) -> Result<(), DeleteTopicError>;
}
