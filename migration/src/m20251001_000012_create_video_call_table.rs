use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VideoCall::Table)
                    .if_not_exists()
                    .col(pk_auto(VideoCall::Id))
                    .col(string_uniq(VideoCall::ChannelName))
                    .col(integer(VideoCall::CreatorId))
                    .col(string(VideoCall::CreatorName))
                    .col(string(VideoCall::CallType))
                    .col(string_null(VideoCall::RoomName))
                    .col(text_null(VideoCall::Description))
                    .col(json(VideoCall::InvitedUsers))
                    .col(string(VideoCall::Status).default("waiting"))
                    .col(integer(VideoCall::MaxParticipants).default(50))
                    .col(boolean(VideoCall::IsPublic).default(true))
                    .col(string_null(VideoCall::PasswordHash))
                    .col(timestamp(VideoCall::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_null(VideoCall::StartedAt))
                    .col(timestamp_null(VideoCall::EndedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(VideoCall::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum VideoCall {
    Table,
    Id,
    ChannelName,
    CreatorId,
    CreatorName,
    CallType,
    RoomName,
    Description,
    InvitedUsers,
    Status,
    MaxParticipants,
    IsPublic,
    PasswordHash,
    CreatedAt,
    StartedAt,
    EndedAt,
}
