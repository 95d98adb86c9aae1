use sea_orm_migration::{prelude::*, schema::*};

use super::m20251001_000012_create_video_call_table::VideoCall;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VideoCallParticipant::Table)
                    .if_not_exists()
                    .col(pk_auto(VideoCallParticipant::Id))
                    .col(integer(VideoCallParticipant::CallId))
                    .col(integer(VideoCallParticipant::UserId))
                    .col(string(VideoCallParticipant::Username))
                    .col(
                        timestamp(VideoCallParticipant::JoinedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_video_call_participant_call_id")
                            .from(VideoCallParticipant::Table, VideoCallParticipant::CallId)
                            .to(VideoCall::Table, VideoCall::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .name("idx_video_call_participant_unique")
                            .col(VideoCallParticipant::CallId)
                            .col(VideoCallParticipant::UserId)
                            .unique(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(VideoCallParticipant::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum VideoCallParticipant {
    Table,
    Id,
    CallId,
    UserId,
    Username,
    JoinedAt,
}
