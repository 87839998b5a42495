use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::category::application::ports::outgoing::CategoryQuery;
use crate::topic::application::domain::entities::{make_excerpt, EXCERPT_LENGTH};
use crate::topic::application::ports::incoming::use_cases::{
    CreateTopicError, CreateTopicUseCase, TopicCommand,
};
use crate::topic::application::ports::outgoing::{
    CreateTopicData, TopicRepository, TopicRepositoryError, TopicResult,
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct CreateTopicService<R, C>
where
    R: TopicRepository,
    C: CategoryQuery,
{
    repository: R,
    categories: C,
}

impl<R, C> CreateTopicService<R, C>
where
    R: TopicRepository,
    C: CategoryQuery,
{
    pub fn new(repository: R, categories: C) -> Self {
        Self {
            repository,
            categories,
        }
    }
}

#[async_trait]
impl<R, C> CreateTopicUseCase for CreateTopicService<R, C>
where
    R: TopicRepository + Send + Sync,
    C: CategoryQuery + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        command: TopicCommand,
    ) -> Result<TopicResult, CreateTopicError> {
        let category_exists = self
            .categories
            .exists(command.category_id())
            .await
            .map_err(|e| CreateTopicError::RepositoryError(e.to_string()))?;

        if !category_exists {
            return Err(CreateTopicError::CategoryNotFound);
        }

        let data = CreateTopicData {
            owner,
            title: command.title().to_string(),
            body: command.body().to_string(),
            excerpt: make_excerpt(command.body(), EXCERPT_LENGTH),
            category_id: command.category_id(),
        };

        self.repository
            .create_topic(data)
            .await
            .map_err(|e| match e {
                TopicRepositoryError::DatabaseError(msg) => CreateTopicError::RepositoryError(msg),
                TopicRepositoryError::NotFound => CreateTopicError::RepositoryError(
                    "topic vanished while being created".to_string(),
                ),
            })
    }
}
