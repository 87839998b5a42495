use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use std::collections::HashMap;
use std::sync::Arc;

use crate::modules::category::adapter::outgoing::sea_orm_entity as categories;
use crate::modules::category::application::ports::outgoing::CategoryItem;
use crate::modules::topic::application::ports::outgoing::{
    PageRequest, PageResult, TopicOrder, TopicQuery, TopicQueryError, TopicView,
};

// SeaORM entity
use super::sea_orm_entity::{Column as TopicColumn, Entity as TopicEntity, Model as TopicModel};

#[derive(Debug, Clone)]
pub struct TopicQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TopicQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn categories_for(
        &self,
        topics: &[TopicModel],
    ) -> Result<HashMap<i64, CategoryItem>, TopicQueryError> {
        if topics.is_empty() {
            return Ok(HashMap::new());
        }

        let mut ids: Vec<i64> = topics.iter().map(|t| t.category_id).collect();
        ids.sort_unstable();
        ids.dedup();

        let rows = categories::Entity::find()
            .filter(categories::Column::Id.is_in(ids))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.iter().map(|c| (c.id, c.to_item())).collect())
    }
}

#[async_trait]
impl TopicQuery for TopicQueryPostgres {
    async fn list(
        &self,
        order: TopicOrder,
        page: PageRequest,
    ) -> Result<PageResult<TopicView>, TopicQueryError> {
        let query = match order {
            TopicOrder::Recent => TopicEntity::find().order_by_desc(TopicColumn::CreatedAt),
            TopicOrder::RecentReplied => TopicEntity::find().order_by_desc(TopicColumn::UpdatedAt),
        }
        .order_by_desc(TopicColumn::Id);

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        // Pages past what Postgres can address are simply empty
        let offset = page
            .page
            .saturating_sub(1)
            .checked_mul(page.per_page)
            .filter(|offset| *offset <= i64::MAX as u64);

        let models = match offset {
            Some(offset) => query
                .offset(offset)
                .limit(page.per_page)
                .all(&*self.db)
                .await
                .map_err(map_db_err)?,
            None => Vec::new(),
        };

        let categories = self.categories_for(&models).await?;

        let items = models
            .into_iter()
            .map(|m| {
                let category = categories.get(&m.category_id).cloned();
                m.to_view(category)
            })
            .collect();

        Ok(PageResult {
            items,
            page: page.page,
            per_page: page.per_page,
            total,
        })
    }

    async fn get_by_id(&self, topic_id: i64) -> Result<TopicView, TopicQueryError> {
        let model = TopicEntity::find_by_id(topic_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(TopicQueryError::NotFound)?;

        let category = categories::Entity::find_by_id(model.category_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(|c| c.to_item());

        Ok(model.to_view(category))
    }
}

fn map_db_err(err: DbErr) -> TopicQueryError {
    tracing::error!(error = %err, "topic query failed");
    TopicQueryError::DatabaseError(err.to_string())
}
