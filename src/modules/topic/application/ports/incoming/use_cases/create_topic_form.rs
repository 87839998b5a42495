use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::category::application::ports::outgoing::CategoryItem;
use crate::topic::application::ports::outgoing::TopicView;

/// Data behind the create/edit form: the topic being edited, if any, and the
/// categories to choose from.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TopicForm {
    pub topic: Option<TopicView>,
    pub categories: Vec<CategoryItem>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TopicFormError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait CreateTopicFormUseCase: Send + Sync {
    async fn execute(&self) -> Result<TopicForm, TopicFormError>;
}
