use sea_orm_migration::{prelude::*, schema::*};

use super::m20251001_000009_create_doodle_table::Doodle;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DoodleResponse::Table)
                    .if_not_exists()
                    .col(pk_auto(DoodleResponse::Id))
                    .col(integer(DoodleResponse::DoodleId))
                    .col(integer(DoodleResponse::UserId))
                    .col(string(DoodleResponse::Username))
                    .col(json(DoodleResponse::Responses))
                    .col(string_len_null(DoodleResponse::Comment, 500))
                    .col(
                        timestamp(DoodleResponse::RespondedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_doodle_response_doodle_id")
                            .from(DoodleResponse::Table, DoodleResponse::DoodleId)
                            .to(Doodle::Table, Doodle::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .name("idx_doodle_response_unique")
                            .col(DoodleResponse::DoodleId)
                            .col(DoodleResponse::UserId)
                            .unique(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DoodleResponse::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DoodleResponse {
    Table,
    Id,
    DoodleId,
    UserId,
    Username,
    Responses,
    Comment,
    RespondedAt,
}
