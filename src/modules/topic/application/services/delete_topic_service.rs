use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::topic::application::domain::policies::{TopicAbility, TopicPolicy};
use crate::topic::application::ports::incoming::use_cases::{DeleteTopicError, DeleteTopicUseCase};
use crate::topic::application::ports::outgoing::{
    TopicQuery, TopicQueryError, TopicRepository, TopicRepositoryError,
};

pub struct DeleteTopicService<Q, R, P>
where
    Q: TopicQuery,
    R: TopicRepository,
    P: TopicPolicy,
{
    query: Q,
    repository: R,
    policy: P,
}

impl<Q, R, P> DeleteTopicService<Q, R, P>
where
    Q: TopicQuery,
    R: TopicRepository,
    P: TopicPolicy,
{
    pub fn new(query: Q, repository: R, policy: P) -> Self {
        Self {
            query,
            repository,
            policy,
        }
    }
}

#[async_trait]
impl<Q, R, P> DeleteTopicUseCase for DeleteTopicService<Q, R, P>
where
    Q: TopicQuery + Send + Sync,
    R: TopicRepository + Send + Sync,
    P: TopicPolicy + Send + Sync,
{
    async fn execute(&self, actor: UserId, topic_id: i64) -> Result<(), DeleteTopicError> {
        let topic = self.query.get_by_id(topic_id).await.map_err(|e| match e {
            TopicQueryError::NotFound => DeleteTopicError::NotFound,
            TopicQueryError::DatabaseError(msg) => DeleteTopicError::RepositoryError(msg),
        })?;

        if !self.policy.allows(&actor, &topic, TopicAbility::Destroy) {
            tracing::warn!(topic_id, actor = %actor, "delete refused by topic policy");
            return Err(DeleteTopicError::Forbidden);
        }

        self.repository
            .delete_topic(topic.id)
            .await
            .map_err(|e| match e {
                TopicRepositoryError::NotFound => DeleteTopicError::NotFound,
                TopicRepositoryError::DatabaseError(msg) => DeleteTopicError::RepositoryError(msg),
            })
    }
}
