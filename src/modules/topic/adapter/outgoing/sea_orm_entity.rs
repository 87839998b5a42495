use sea_orm::entity::prelude::*;

use crate::auth::application::domain::entities::UserId;
use crate::modules::category::application::ports::outgoing::CategoryItem;
use crate::modules::topic::application::ports::outgoing::{TopicResult, TopicView};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "topics")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub body: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub excerpt: Option<String>,

    pub user_id: i64,

    pub category_id: i64,

    pub reply_count: i32,

    pub view_count: i32,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_repository_result(&self) -> TopicResult {
        TopicResult {
            id: self.id,
            owner: UserId::from(self.user_id),
            title: self.title.clone(),
            category_id: self.category_id,
        }
    }

    pub fn to_view(self, category: Option<CategoryItem>) -> TopicView {
        TopicView {
            id: self.id,
            title: self.title,
            body: self.body,
            excerpt: self.excerpt,
            user_id: UserId::from(self.user_id),
            category_id: self.category_id,
            category,
            reply_count: self.reply_count,
            view_count: self.view_count,
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::category::adapter::outgoing::sea_orm_entity::Entity",
        from = "Column::CategoryId",
        to = "crate::modules::category::adapter::outgoing::sea_orm_entity::Column::Id"
    )]
    Category,
}

impl Related<crate::modules::category::adapter::outgoing::sea_orm_entity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        #[cfg(feature = "no_db_triggers")]
        {
            use chrono::Utc;
            use sea_orm::ActiveValue::Set;

            if !_insert {
                self.updated_at = Set(Utc::now().into());
            }
        }

        Ok(self)
    }
}
