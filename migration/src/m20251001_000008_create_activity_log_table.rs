use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ActivityLog::Table)
                    .if_not_exists()
                    .col(pk_auto(ActivityLog::Id))
                    .col(string(ActivityLog::Username))
                    .col(string(ActivityLog::EventType))
                    .col(string(ActivityLog::IpAddress))
                    .col(string_null(ActivityLog::UserAgent))
                    .col(boolean(ActivityLog::Success))
                    .col(json_null(ActivityLog::AdditionalInfo))
                    .col(timestamp(ActivityLog::Timestamp).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_activity_log_username_timestamp")
                    .table(ActivityLog::Table)
                    .col(ActivityLog::Username)
                    .col(ActivityLog::Timestamp)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ActivityLog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ActivityLog {
    Table,
    Id,
    Username,
    EventType,
    IpAddress,
    UserAgent,
    Success,
    AdditionalInfo,
    Timestamp,
}
