use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::category::application::ports::outgoing::CategoryQuery;
use crate::topic::application::domain::policies::{TopicAbility, TopicPolicy};
use crate::topic::application::ports::incoming::use_cases::{
    EditTopicFormError, EditTopicFormUseCase, TopicForm,
};
use crate::topic::application::ports::outgoing::{TopicQuery, TopicQueryError};

pub struct EditTopicFormService<Q, C, P>
where
    Q: TopicQuery,
    C: CategoryQuery,
    P: TopicPolicy,
{
    query: Q,
    categories: C,
    policy: P,
}

impl<Q, C, P> EditTopicFormService<Q, C, P>
where
    Q: TopicQuery,
    C: CategoryQuery,
    P: TopicPolicy,
{
    pub fn new(query: Q, categories: C, policy: P) -> Self {
        Self {
            query,
            categories,
            policy,
        }
    }
}

#[async_trait]
impl<Q, C, P> EditTopicFormUseCase for EditTopicFormService<Q, C, P>
where
    Q: TopicQuery + Send + Sync,
    C: CategoryQuery + Send + Sync,
    P: TopicPolicy + Send + Sync,
{
    async fn execute(&self, actor: UserId, topic_id: i64) -> Result<TopicForm, EditTopicFormError> {
        let topic = self.query.get_by_id(topic_id).await.map_err(|e| match e {
            TopicQueryError::NotFound => EditTopicFormError::NotFound,
            TopicQueryError::DatabaseError(msg) => EditTopicFormError::QueryError(msg),
        })?;

        if !self.policy.allows(&actor, &topic, TopicAbility::Update) {
            return Err(EditTopicFormError::Forbidden);
        }

        let categories = self
            .categories
            .list_all()
            .await
            .map_err(|e| EditTopicFormError::QueryError(e.to_string()))?;

        Ok(TopicForm {
            topic: Some(topic),
            categories,
        })
    }
}
