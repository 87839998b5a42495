use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::topic::application::ports::outgoing::TopicResult;

use super::topic_command::TopicCommand;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateTopicError {
    #[error("Topic not found")]
    NotFound,

    #[error("Not allowed to update this topic")]
    Forbidden,

    #[error("Category not found")]
    CategoryNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateTopicUseCase: Send + Sync {
    async fn execute(
        &self,
        actor: UserId,
        topic_id: i64,
        command: TopicCommand,
    ) -> Result<TopicResult, UpdateTopicError>;
}
