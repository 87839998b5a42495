use async_trait::async_trait;

use crate::category::application::ports::outgoing::CategoryQuery;
use crate::topic::application::ports::incoming::use_cases::{
    CreateTopicFormUseCase, TopicForm, TopicFormError,
};

pub struct CreateTopicFormService<C>
where
    C: CategoryQuery,
{
    categories: C,
}

impl<C> CreateTopicFormService<C>
where
    C: CategoryQuery,
{
    pub fn new(categories: C) -> Self {
        Self { categories }
    }
}

#[async_trait]
impl<C> CreateTopicFormUseCase for CreateTopicFormService<C>
where
    C: CategoryQuery + Send + Sync,
{
    async fn execute(&self) -> Result<TopicForm, TopicFormError> {
        let categories = self
            .categories
            .list_all()
            .await
            .map_err(|e| TopicFormError::QueryError(e.to_string()))?;

        Ok(TopicForm {
            topic: None,
            categories,
        })
    }
}
