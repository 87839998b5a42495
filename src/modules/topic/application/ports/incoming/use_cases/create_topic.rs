use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::topic::application::ports::outgoing::TopicResult;

use super::topic_command::TopicCommand;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateTopicError {
    #[error("Category not found")]
    CategoryNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateTopicUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        command: TopicCommand,
    ) -> Result<TopicResult, CreateTopicError>;
}
