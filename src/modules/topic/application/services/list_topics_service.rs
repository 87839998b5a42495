use async_trait::async_trait;

use crate::topic::application::ports::incoming::use_cases::{ListTopicsError, ListTopicsUseCase};
use crate::topic::application::ports::outgoing::{
    PageRequest, PageResult, TopicOrder, TopicQuery, TopicView,
};

/// Fixed page size of the topic list.
pub const TOPICS_PER_PAGE: u64 = 30;

pub struct ListTopicsService<Q>
where
    Q: TopicQuery,
{
    query: Q,
}

impl<Q> ListTopicsService<Q>
where
    Q: TopicQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListTopicsUseCase for ListTopicsService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    async fn execute(
        &self,
        order: TopicOrder,
        page: u64,
    ) -> Result<PageResult<TopicView>, ListTopicsError> {
        let page = PageRequest {
            page: page.max(1),
            per_page: TOPICS_PER_PAGE,
        };

        self.query
            .list(order, page)
            .await
            .map_err(|e| ListTopicsError::QueryError(e.to_string()))
    }
}
