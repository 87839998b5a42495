use async_trait::async_trait;

use crate::topic::application::ports::incoming::use_cases::{ShowTopicError, ShowTopicUseCase};
use crate::topic::application::ports::outgoing::{TopicQuery, TopicQueryError, TopicView};

pub struct ShowTopicService<Q>
where
    Q: TopicQuery,
{
    query: Q,
}

impl<Q> ShowTopicService<Q>
where
    Q: TopicQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ShowTopicUseCase for ShowTopicService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    async fn execute(&self, topic_id: i64) -> Result<TopicView, ShowTopicError> {
        self.query
            .get_by_id(topic_id)
            .await
            .map_err(|e| match e {
                TopicQueryError::NotFound => ShowTopicError::NotFound,
                TopicQueryError::DatabaseError(msg) => ShowTopicError::QueryError(msg),
            })
    }
}
