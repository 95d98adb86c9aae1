use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ChatMessage::Table)
                    .if_not_exists()
                    .col(pk_auto(ChatMessage::Id))
                    .col(integer_null(ChatMessage::UserId))
                    .col(string(ChatMessage::Username))
                    .col(text(ChatMessage::Message))
                    .col(string(ChatMessage::MessageType).default("text"))
                    .col(timestamp(ChatMessage::CreatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_chat_message_created_at")
                    .table(ChatMessage::Table)
                    .col(ChatMessage::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ChatMessage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ChatMessage {
    Table,
    Id,
    UserId,
    Username,
    Message,
    MessageType,
    CreatedAt,
}
