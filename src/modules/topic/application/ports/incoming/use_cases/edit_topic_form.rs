use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;

use super::create_topic_form::TopicForm;

#[derive(Debug, Clone, thiserror::Error)]
pub enum EditTopicFormError {
    #[error("Topic not found")]
    NotFound,

    #[error("Not allowed to edit this topic")]
    Forbidden,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait EditTopicFormUseCase: Send + Sync {
    async fn execute(&self, actor: UserId, topic_id: i64) -> Result<TopicForm, EditTopicFormError>;
}
