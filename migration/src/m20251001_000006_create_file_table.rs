use sea_orm_migration::{prelude::*, schema::*};

use super::m20251001_000002_create_category_table::Category;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(File::Table)
                    .if_not_exists()
                    .col(pk_auto(File::Id))
                    .col(string(File::Filename))
                    .col(string(File::OriginalName))
                    .col(string(File::FileType))
                    .col(big_integer(File::FileSize).default(0))
                    .col(string(File::Url))
                    .col(string(File::UploadedBy))
                    .col(integer(File::UploaderId))
                    .col(text_null(File::Description))
                    .col(integer_null(File::CategoryId))
                    .col(string(File::SourceType).default("upload"))
                    .col(string_null(File::OriginalUrl))
                    .col(timestamp(File::UploadedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_file_category_id")
                            .from(File::Table, File::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(File::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum File {
    Table,
    Id,
    Filename,
    OriginalName,
    FileType,
    FileSize,
    Url,
    UploadedBy,
    UploaderId,
    Description,
    CategoryId,
    SourceType,
    OriginalUrl,
    UploadedAt,
}
