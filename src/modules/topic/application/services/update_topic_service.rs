use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::category::application::ports::outgoing::CategoryQuery;
use crate::topic::application::domain::entities::{make_excerpt, EXCERPT_LENGTH};
use crate::topic::application::domain::policies::{TopicAbility, TopicPolicy};
use crate::topic::application::ports::incoming::use_cases::{
    TopicCommand, UpdateTopicError, UpdateTopicUseCase,
};
use crate::topic::application::ports::outgoing::{
    TopicQuery, TopicQueryError, TopicRepository, TopicRepositoryError, TopicResult,
    UpdateTopicData,
};

pub struct UpdateTopicService<Q, R, C, P>
where
    Q: TopicQuery,
    R: TopicRepository,
    C: CategoryQuery,
    P: TopicPolicy,
{
    query: Q,
    repository: R,
    categories: C,
    policy: P,
}

impl<Q, R, C, P> UpdateTopicService<Q, R, C, P>
where
    Q: TopicQuery,
    R: TopicRepository,
    C: CategoryQuery,
    P: TopicPolicy,
{
    pub fn new(query: Q, repository: R, categories: C, policy: P) -> Self {
        Self {
            query,
            repository,
            categories,
            policy,
        }
    }
}

#[async_trait]
impl<Q, R, C, P> UpdateTopicUseCase for UpdateTopicService<Q, R, C, P>
where
    Q: TopicQuery + Send + Sync,
    R: TopicRepository + Send + Sync,
    C: CategoryQuery + Send + Sync,
    P: TopicPolicy + Send + Sync,
{
    async fn execute(
        &self,
        actor: UserId,
        topic_id: i64,
        command: TopicCommand,
    ) -> Result<TopicResult, UpdateTopicError> {
        let topic = self.query.get_by_id(topic_id).await.map_err(|e| match e {
            TopicQueryError::NotFound => UpdateTopicError::NotFound,
            TopicQueryError::DatabaseError(msg) => UpdateTopicError::RepositoryError(msg),
        })?;

        if !self.policy.allows(&actor, &topic, TopicAbility::Update) {
            tracing::warn!(topic_id, actor = %actor, "update refused by topic policy");
            return Err(UpdateTopicError::Forbidden);
        }

        let category_exists = self
            .categories
            .exists(command.category_id())
            .await
            .map_err(|e| UpdateTopicError::RepositoryError(e.to_string()))?;

        if !category_exists {
            return Err(UpdateTopicError::CategoryNotFound);
        }

        let data = UpdateTopicData {
            title: command.title().to_string(),
            body: command.body().to_string(),
            excerpt: make_excerpt(command.body(), EXCERPT_LENGTH),
            category_id: command.category_id(),
        };

        self.repository
            .update_topic(topic.id, data)
            .await
            .map_err(|e| match e {
                TopicRepositoryError::NotFound => UpdateTopicError::NotFound,
                TopicRepositoryError::DatabaseError(msg) => UpdateTopicError::RepositoryError(msg),
            })
    }
}
