use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

/// A forum category as shown in topic forms and next to each topic.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CategoryItem {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "分享")]
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CategoryQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CategoryQuery: Send + Sync {
    /// All categories ordered by id.
    async fn list_all(&self) -> Result<Vec<CategoryItem>, CategoryQueryError>;

    async fn exists(&self, category_id: i64) -> Result<bool, CategoryQueryError>;
}
