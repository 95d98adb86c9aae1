//! Shared files: uploads proxied to Cloudinary and plain link references.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::file::FileRepository,
    error::AppError,
    integration::cloudinary::{resource_type_for, CloudinaryClient},
    model::{
        file::{CreateFileParams, FileRecord, SourceType},
        user::User,
    },
    util::validate::{optional_max_length, require_http_url, require_length},
};

/// A file received from a multipart form.
pub struct Upload {
    pub bytes: Vec<u8>,
    pub filename: String,
    pub content_type: String,
    pub description: Option<String>,
    pub category_id: Option<i32>,
}

/// A URL shared instead of an uploaded file.
pub struct Link {
    pub url: String,
    pub title: String,
    pub description: Option<String>,
    pub category_id: Option<i32>,
}

pub struct FileService<'a> {
    db: &'a DatabaseConnection,
    storage: &'a CloudinaryClient,
}

impl<'a> FileService<'a> {
    pub fn new(db: &'a DatabaseConnection, storage: &'a CloudinaryClient) -> Self {
        Self { db, storage }
    }

    pub async fn get_all(&self, category_id: Option<i32>) -> Result<Vec<FileRecord>, AppError> {
        Ok(FileRepository::new(self.db).get_all(category_id).await?)
    }

    pub async fn get(&self, id: i32) -> Result<FileRecord, AppError> {
        FileRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("File not found".to_string()))
    }

    /// Uploads a file to storage and records it.
    ///
    /// # Returns
    /// - `Ok(FileRecord)` - Stored record pointing at the asset's secure URL
    /// - `Err(AppError::BadRequest)` - Empty file or missing file name
    /// - `Err(AppError::IntegrationErr)` - Storage not configured (503) or upload failed
    pub async fn upload(&self, uploader: &User, upload: Upload) -> Result<FileRecord, AppError> {
        if upload.bytes.is_empty() {
            return Err(AppError::BadRequest("File is empty".to_string()));
        }
        require_length("filename", &upload.filename, 1, 255)?;
        optional_max_length("description", upload.description.as_deref(), 1000)?;

        let asset = self
            .storage
            .upload(upload.bytes, &upload.filename, &upload.content_type)
            .await?;

        let file = FileRepository::new(self.db)
            .create(CreateFileParams {
                filename: asset.public_id,
                original_name: upload.filename,
                file_type: upload.content_type,
                file_size: asset.bytes,
                url: asset.secure_url,
                uploaded_by: uploader.name.clone(),
                uploader_id: uploader.id,
                description: upload.description,
                category_id: upload.category_id,
                source_type: SourceType::Upload,
                original_url: None,
            })
            .await?;

        tracing::info!("File {} uploaded by {}", file.id, uploader.name);

        Ok(file)
    }

    /// Records a shared URL.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Not an http(s) URL or invalid title
    pub async fn create_link(&self, uploader: &User, link: Link) -> Result<FileRecord, AppError> {
        let url = require_http_url(&link.url)?;
        require_length("title", &link.title, 1, 255)?;
        optional_max_length("description", link.description.as_deref(), 1000)?;

        let url = url.to_string();
        let file = FileRepository::new(self.db)
            .create(CreateFileParams {
                filename: link.title.trim().to_string(),
                original_name: link.title.trim().to_string(),
                file_type: "link".to_string(),
                file_size: 0,
                url: url.clone(),
                uploaded_by: uploader.name.clone(),
                uploader_id: uploader.id,
                description: link.description,
                category_id: link.category_id,
                source_type: SourceType::Url,
                original_url: Some(url),
            })
            .await?;

        Ok(file)
    }

    /// Deletes a file on behalf of `actor`, removing uploads from storage first.
    ///
    /// # Returns
    /// - `Err(AppError::Forbidden)` - Actor is neither the uploader nor an admin
    pub async fn delete(&self, actor: &User, id: i32) -> Result<(), AppError> {
        let file = self.get(id).await?;
        if file.uploader_id != actor.id && !actor.is_admin() {
            return Err(AppError::Forbidden(
                "Not authorized to delete this file".to_string(),
            ));
        }

        if file.source_type == SourceType::Upload {
            self.storage
                .destroy(&file.filename, resource_type_for(&file.file_type))
                .await?;
        }

        FileRepository::new(self.db).delete(id).await?;

        tracing::info!("File {} deleted by {}", id, actor.name);

        Ok(())
    }
}
