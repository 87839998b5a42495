use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryOrder};
use std::sync::Arc;

use crate::modules::category::application::ports::outgoing::{
    CategoryItem, CategoryQuery, CategoryQueryError,
};

use super::sea_orm_entity::{Column, Entity};

#[derive(Debug, Clone)]
pub struct CategoryQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CategoryQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryQuery for CategoryQueryPostgres {
    async fn list_all(&self) -> Result<Vec<CategoryItem>, CategoryQueryError> {
        let models = Entity::find()
            .order_by_asc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.iter().map(|m| m.to_item()).collect())
    }

    async fn exists(&self, category_id: i64) -> Result<bool, CategoryQueryError> {
        let count = Entity::find_by_id(category_id)
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(count > 0)
    }
}

fn map_db_err(err: DbErr) -> CategoryQueryError {
    tracing::error!(error = %err, "category query failed");
    CategoryQueryError::DatabaseError(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::category::adapter::outgoing::sea_orm_entity::Model;
    use sea_orm::{DatabaseBackend, MockDatabase, RuntimeErr, Value};

    fn category(id: i64, name: &str) -> Model {
        Model {
            id,
            name: name.to_string(),
            description: Some(format!("{} description", name)),
            post_count: 0,
        }
    }

    #[tokio::test]
    async fn list_all_maps_rows_in_order() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![category(1, "分享"), category(2, "教程")]])
            .into_connection();

        let query = CategoryQueryPostgres::new(Arc::new(db));

        let items = query.list_all().await.unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, 1);
        assert_eq!(items[0].name, "分享");
        assert_eq!(items[1].name, "教程");
    }

    #[tokio::test]
    async fn list_all_returns_empty_vec() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<Model>::new()])
            .into_connection();

        let query = CategoryQueryPostgres::new(Arc::new(db));

        assert!(query.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn exists_is_true_when_row_counted() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![maplit::btreemap! {
                "num_items" => Into::<Value>::into(1i64)
            }]])
            .into_connection();

        let query = CategoryQueryPostgres::new(Arc::new(db));

        assert!(query.exists(1).await.unwrap());
    }

    #[tokio::test]
    async fn exists_is_false_for_unknown_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![maplit::btreemap! {
                "num_items" => Into::<Value>::into(0i64)
            }]])
            .into_connection();

        let query = CategoryQueryPostgres::new(Arc::new(db));

        assert!(!query.exists(99).await.unwrap());
    }

    #[tokio::test]
    async fn database_error_is_mapped() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Query(RuntimeErr::Internal(
                "connection lost".into(),
            ))])
            .into_connection();

        let query = CategoryQueryPostgres::new(Arc::new(db));

        assert!(matches!(
            query.list_all().await,
            Err(CategoryQueryError::DatabaseError(_))
        ));
    }
}
