use std::str::FromStr;

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::file::{FileDto, SourceTypeDto},
    server::util::parse::parse_stored,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceType {
    Upload,
    Url,
}

impl SourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upload => "upload",
            Self::Url => "url",
        }
    }
}

impl FromStr for SourceType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upload" => Ok(Self::Upload),
            "url" => Ok(Self::Url),
            _ => Err(()),
        }
    }
}

/// Uploaded file or shared link.
#[derive(Debug, Clone, PartialEq)]
pub struct FileRecord {
    pub id: i32,
    /// Storage public id for uploads, the title for links.
    pub filename: String,
    pub original_name: String,
    pub file_type: String,
    pub file_size: i64,
    pub url: String,
    pub uploaded_by: String,
    pub uploader_id: i32,
    pub description: Option<String>,
    pub category_id: Option<i32>,
    pub source_type: SourceType,
    pub original_url: Option<String>,
    pub uploaded_at: DateTime<Utc>,
}

impl FileRecord {
    pub fn from_entity(entity: entity::file::Model) -> Result<Self, DbErr> {
        Ok(Self {
            source_type: parse_stored("source type", &entity.source_type)?,
            id: entity.id,
            filename: entity.filename,
            original_name: entity.original_name,
            file_type: entity.file_type,
            file_size: entity.file_size,
            url: entity.url,
            uploaded_by: entity.uploaded_by,
            uploader_id: entity.uploader_id,
            description: entity.description,
            category_id: entity.category_id,
            original_url: entity.original_url,
            uploaded_at: entity.uploaded_at,
        })
    }

    pub fn into_dto(self) -> FileDto {
        FileDto {
            id: self.id,
            filename: self.filename,
            original_name: self.original_name,
            file_type: self.file_type,
            file_size: self.file_size,
            url: self.url,
            uploaded_by: self.uploaded_by,
            uploader_id: self.uploader_id,
            description: self.description,
            category_id: self.category_id,
            source_type: match self.source_type {
                SourceType::Upload => SourceTypeDto::Upload,
                SourceType::Url => SourceTypeDto::Url,
            },
            original_url: self.original_url,
            uploaded_at: self.uploaded_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateFileParams {
    pub filename: String,
    pub original_name: String,
    pub file_type: String,
    pub file_size: i64,
    pub url: String,
    pub uploaded_by: String,
    pub uploader_id: i32,
    pub description: Option<String>,
    pub category_id: Option<i32>,
    pub source_type: SourceType,
    pub original_url: Option<String>,
}
