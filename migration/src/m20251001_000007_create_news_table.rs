use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(News::Table)
                    .if_not_exists()
                    .col(pk_auto(News::Id))
                    .col(string_len(News::Title, 500))
                    .col(string(News::Url))
                    .col(text_null(News::Comment))
                    .col(integer(News::CreatedBy))
                    .col(string(News::CreatedByName))
                    .col(timestamp(News::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp(News::UpdatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(News::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum News {
    Table,
    Id,
    Title,
    Url,
    Comment,
    CreatedBy,
    CreatedByName,
    CreatedAt,
    UpdatedAt,
}
