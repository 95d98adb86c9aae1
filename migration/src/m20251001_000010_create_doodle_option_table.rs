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
                    .table(DoodleOption::Table)
                    .if_not_exists()
                    .col(pk_auto(DoodleOption::Id))
                    .col(integer(DoodleOption::DoodleId))
                    .col(string(DoodleOption::OptionId))
                    .col(timestamp(DoodleOption::Datetime))
                    .col(string(DoodleOption::Label))
                    .col(integer(DoodleOption::Position))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_doodle_option_doodle_id")
                            .from(DoodleOption::Table, DoodleOption::DoodleId)
                            .to(Doodle::Table, Doodle::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .name("idx_doodle_option_unique")
                            .col(DoodleOption::DoodleId)
                            .col(DoodleOption::OptionId)
                            .unique(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DoodleOption::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DoodleOption {
    Table,
    Id,
    DoodleId,
    OptionId,
    Datetime,
    Label,
    Position,
}
