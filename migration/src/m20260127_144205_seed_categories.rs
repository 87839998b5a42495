use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

const DEFAULT_CATEGORIES: [(&str, &str); 4] = [
    ("分享", "分享创造，分享发现"),
    ("教程", "开发技巧、推荐扩展包等"),
    ("问答", "请保持友善，互帮互助"),
    ("公告", "站点公告"),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert = Query::insert();
        insert
            .into_table(Categories::Table)
            .columns([Categories::Name, Categories::Description]);

        for (name, description) in DEFAULT_CATEGORIES {
            insert.values_panic([name.into(), description.into()]);
        }

        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let names: Vec<&str> = DEFAULT_CATEGORIES.iter().map(|(name, _)| *name).collect();

        manager
            .exec_stmt(
                Query::delete()
                    .from_table(Categories::Table)
                    .and_where(Expr::col(Categories::Name).is_in(names))
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum Categories {
    Table,
    Name,
    Description,
}
