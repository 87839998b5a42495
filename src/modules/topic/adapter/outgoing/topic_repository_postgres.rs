use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use std::sync::Arc;

use crate::modules::topic::application::ports::outgoing::{
    CreateTopicData, TopicRepository, TopicRepositoryError, TopicResult, UpdateTopicData,
};

// SeaORM entity imports
use super::sea_orm_entity::{
    ActiveModel as TopicActiveModel, Entity as TopicEntity, Model as TopicModel,
};

#[derive(Debug, Clone)]
pub struct TopicRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TopicRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TopicRepository for TopicRepositoryPostgres {
    async fn create_topic(
        &self,
        data: CreateTopicData,
    ) -> Result<TopicResult, TopicRepositoryError> {
        let active = TopicActiveModel {
            title: Set(data.title),
            body: Set(data.body),
            excerpt: Set(Some(data.excerpt)),
            user_id: Set(data.owner.into()),
            category_id: Set(data.category_id),
            reply_count: Set(0),
            view_count: Set(0),
            ..Default::default()
        };

        let inserted: TopicModel = active.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(inserted.to_repository_result())
    }

    async fn update_topic(
        &self,
        topic_id: i64,
        data: UpdateTopicData,
    ) -> Result<TopicResult, TopicRepositoryError> {
        let active = TopicActiveModel {
            id: Set(topic_id),
            title: Set(data.title),
            body: Set(data.body),
            excerpt: Set(Some(data.excerpt)),
            category_id: Set(data.category_id),
            ..Default::default()
        };

        let updated = active.update(&*self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => TopicRepositoryError::NotFound,
            other => map_db_err(other),
        })?;

        Ok(updated.to_repository_result())
    }

    async fn delete_topic(&self, topic_id: i64) -> Result<(), TopicRepositoryError> {
        let result = TopicEntity::delete_by_id(topic_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(TopicRepositoryError::NotFound);
        }

        Ok(())
    }
}

fn map_db_err(err: DbErr) -> TopicRepositoryError {
    tracing::error!(error = %err, "topic repository failed");
    TopicRepositoryError::DatabaseError(err.to_string())
}
