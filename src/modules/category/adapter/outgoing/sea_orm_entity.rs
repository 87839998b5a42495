use sea_orm::entity::prelude::*;

use crate::modules::category::application::ports::outgoing::CategoryItem;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    #[sea_orm(unique)]
    pub name: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,

    pub post_count: i32,
}

impl Model {
    pub fn to_item(&self) -> CategoryItem {
        CategoryItem {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
