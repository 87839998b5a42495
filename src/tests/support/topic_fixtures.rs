use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use mockall::mock;
use std::sync::Mutex;

use crate::auth::application::domain::entities::UserId;
use crate::category::application::ports::outgoing::{
    CategoryItem, CategoryQuery, CategoryQueryError,
};
use crate::topic::application::ports::outgoing::{
    CreateTopicData, PageRequest, PageResult, TopicOrder, TopicQuery, TopicQueryError,
    TopicRepository, TopicRepositoryError, TopicResult, TopicView, UpdateTopicData,
};

// ============================================================
// Sample data
// ============================================================

pub fn sample_category(id: i64) -> CategoryItem {
    CategoryItem {
        id,
        name: format!("Category {}", id),
        description: None,
    }
}

pub fn sample_topic_view(id: i64, owner: UserId) -> TopicView {
    let created_at = Utc.with_ymd_and_hms(2026, 10, 1, 8, 0, 0).unwrap();

    TopicView {
        id,
        title: format!("Topic {}", id),
        body: "<p>Some body text</p>".to_string(),
        excerpt: Some("Some body text".to_string()),
        user_id: owner,
        category_id: 1,
        category: Some(sample_category(1)),
        reply_count: 0,
        view_count: 0,
        created_at,
        updated_at: created_at,
    }
}

pub fn sample_topic_result(id: i64, owner: UserId) -> TopicResult {
    TopicResult {
        id,
        owner,
        title: format!("Topic {}", id),
        category_id: 1,
    }
}

pub fn sample_page(items: Vec<TopicView>, page: u64) -> PageResult<TopicView> {
    PageResult {
        total: items.len() as u64,
        items,
        page,
        per_page: 30,
    }
}

// ============================================================
// TopicQuery stub
// ============================================================

pub struct StubTopicQuery {
    list_result: Result<PageResult<TopicView>, TopicQueryError>,
    get_result: Result<TopicView, TopicQueryError>,
    pub last_list_call: Mutex<Option<(TopicOrder, PageRequest)>>,
}

impl StubTopicQuery {
    pub fn with_topic(topic: TopicView) -> Self {
        Self {
            list_result: Ok(sample_page(vec![topic.clone()], 1)),
            get_result: Ok(topic),
            last_list_call: Mutex::new(None),
        }
    }

    pub fn with_page(page: PageResult<TopicView>) -> Self {
        Self {
            list_result: Ok(page),
            get_result: Err(TopicQueryError::NotFound),
            last_list_call: Mutex::new(None),
        }
    }

    pub fn not_found() -> Self {
        Self {
            list_result: Ok(sample_page(vec![], 1)),
            get_result: Err(TopicQueryError::NotFound),
            last_list_call: Mutex::new(None),
        }
    }

    pub fn db_error(msg: &str) -> Self {
        Self {
            list_result: Err(TopicQueryError::DatabaseError(msg.to_string())),
            get_result: Err(TopicQueryError::DatabaseError(msg.to_string())),
            last_list_call: Mutex::new(None),
        }
    }
}

#[async_trait]
impl TopicQuery for StubTopicQuery {
    async fn list(
        &self,
        order: TopicOrder,
        page: PageRequest,
    ) -> Result<PageResult<TopicView>, TopicQueryError> {
        if let Ok(mut last) = self.last_list_call.lock() {
            *last = Some((order, page));
        }
        self.list_result.clone()
    }

    async fn get_by_id(&self, _topic_id: i64) -> Result<TopicView, TopicQueryError> {
        self.get_result.clone()
    }
}

// ============================================================
// CategoryQuery stub
// ============================================================

#[derive(Clone)]
pub struct StubCategoryQuery {
    list_result: Result<Vec<CategoryItem>, CategoryQueryError>,
    exists_result: Result<bool, CategoryQueryError>,
}

impl StubCategoryQuery {
    pub fn with_categories(categories: Vec<CategoryItem>) -> Self {
        Self {
            list_result: Ok(categories),
            exists_result: Ok(true),
        }
    }

    pub fn missing_category() -> Self {
        Self {
            list_result: Ok(vec![]),
            exists_result: Ok(false),
        }
    }

    pub fn db_error(msg: &str) -> Self {
        Self {
            list_result: Err(CategoryQueryError::DatabaseError(msg.to_string())),
            exists_result: Err(CategoryQueryError::DatabaseError(msg.to_string())),
        }
    }
}

#[async_trait]
impl CategoryQuery for StubCategoryQuery {
    async fn list_all(&self) -> Result<Vec<CategoryItem>, CategoryQueryError> {
        self.list_result.clone()
    }

    async fn exists(&self, _category_id: i64) -> Result<bool, CategoryQueryError> {
        self.exists_result.clone()
    }
}

// ============================================================
// TopicRepository mock (call counts matter)
// ============================================================

mock! {
    pub TopicRepo {}

    #[async_trait]
    impl TopicRepository for TopicRepo {
        async fn create_topic(
            &self,
            data: CreateTopicData,
        ) -> Result<TopicResult, TopicRepositoryError>;

        async fn update_topic(
            &self,
            topic_id: i64,
            data: UpdateTopicData,
        ) -> Result<TopicResult, TopicRepositoryError>;

        async fn delete_topic(&self, topic_id: i64) -> Result<(), TopicRepositoryError>;
    }
}
