use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Doodle::Table)
                    .if_not_exists()
                    .col(pk_auto(Doodle::Id))
                    .col(string_len(Doodle::Title, 200))
                    .col(text_null(Doodle::Description))
                    .col(integer(Doodle::CreatorId))
                    .col(string(Doodle::CreatorName))
                    .col(boolean(Doodle::IsPublic).default(true))
                    .col(timestamp_null(Doodle::Deadline))
                    .col(integer_null(Doodle::MaxParticipants))
                    .col(boolean(Doodle::AllowComments).default(true))
                    .col(boolean(Doodle::AllowMaybe).default(true))
                    .col(string(Doodle::Status).default("active"))
                    .col(string_null(Doodle::FinalOption))
                    .col(timestamp(Doodle::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_null(Doodle::ClosedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Doodle::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Doodle {
    Table,
    Id,
    Title,
    Description,
    CreatorId,
    CreatorName,
    IsPublic,
    Deadline,
    MaxParticipants,
    AllowComments,
    AllowMaybe,
    Status,
    FinalOption,
    CreatedAt,
    ClosedAt,
}
