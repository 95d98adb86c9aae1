//! File data repository for uploaded files and shared links.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::file::{CreateFileParams, FileRecord};

/// Repository providing database operations for file records.
pub struct FileRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FileRepository<'a> {
    /// Creates a new FileRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `FileRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a file record for an upload or a URL reference.
    ///
    /// # Returns
    /// - `Ok(FileRecord)` - The stored record
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateFileParams) -> Result<FileRecord, DbErr> {
        let entity = entity::file::ActiveModel {
            filename: ActiveValue::Set(params.filename),
            original_name: ActiveValue::Set(params.original_name),
            file_type: ActiveValue::Set(params.file_type),
            file_size: ActiveValue::Set(params.file_size),
            url: ActiveValue::Set(params.url),
            uploaded_by: ActiveValue::Set(params.uploaded_by),
            uploader_id: ActiveValue::Set(params.uploader_id),
            description: ActiveValue::Set(params.description),
            category_id: ActiveValue::Set(params.category_id),
            source_type: ActiveValue::Set(params.source_type.as_str().to_string()),
            original_url: ActiveValue::Set(params.original_url),
            uploaded_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        FileRecord::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<FileRecord>, DbErr> {
        entity::prelude::File::find_by_id(id)
            .one(self.db)
            .await?
            .map(FileRecord::from_entity)
            .transpose()
    }

    /// Gets file records newest first, optionally for one category.
    pub async fn get_all(&self, category_id: Option<i32>) -> Result<Vec<FileRecord>, DbErr> {
        let mut query = entity::prelude::File::find();
        if let Some(category_id) = category_id {
            query = query.filter(entity::file::Column::CategoryId.eq(category_id));
        }

        query
            .order_by_desc(entity::file::Column::UploadedAt)
            .order_by_desc(entity::file::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(FileRecord::from_entity)
            .collect()
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::File::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected)
    }
}
