use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(string_uniq(User::Email))
                    .col(string_uniq(User::Name))
                    .col(string(User::PasswordHash))
                    .col(string(User::Role).default("normal"))
                    .col(boolean(User::IsActive).default(true))
                    .col(string_null(User::Avatar))
                    .col(string_len_null(User::Phone, 20))
                    .col(boolean(User::EmailNewPosts).default(true))
                    .col(boolean(User::EmailAdminNotifications).default(true))
                    .col(boolean(User::EmailCommentReplies).default(true))
                    .col(boolean(User::EmailNewComments).default(true))
                    .col(boolean(User::EmailWeeklyDigest).default(false))
                    .col(string_null(User::TelegramId))
                    .col(boolean(User::TelegramEnabled).default(false))
                    .col(boolean(User::TelegramLoginNotifications).default(true))
                    .col(boolean(User::TelegramNewPosts).default(true))
                    .col(boolean(User::TelegramCommentReplies).default(true))
                    .col(boolean(User::TelegramAdminNotifications).default(true))
                    .col(timestamp_null(User::LastSeen))
                    .col(timestamp(User::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp(User::UpdatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    Email,
    Name,
    PasswordHash,
    Role,
    IsActive,
    Avatar,
    Phone,
    EmailNewPosts,
    EmailAdminNotifications,
    EmailCommentReplies,
    EmailNewComments,
    EmailWeeklyDigest,
    TelegramId,
    TelegramEnabled,
    TelegramLoginNotifications,
    TelegramNewPosts,
    TelegramCommentReplies,
    TelegramAdminNotifications,
    LastSeen,
    CreatedAt,
    UpdatedAt,
}
