use async_trait::async_trait;

use crate::topic::application::ports::outgoing::{PageResult, TopicOrder, TopicView};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListTopicsError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait ListTopicsUseCase: Send + Sync {
    async fn execute(
        &self,
        order: TopicOrder,
        page: u64,
    ) -> Result<PageResult<TopicView>, ListTopicsError>;
}
