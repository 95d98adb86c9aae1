use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SourceTypeDto {
    Upload,
    Url,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FileDto {
    pub id: i32,
    pub filename: String,
    pub original_name: String,
    pub file_type: String,
    pub file_size: i64,
    pub url: String,
    pub uploaded_by: String,
    pub uploader_id: i32,
    pub description: Option<String>,
    pub category_id: Option<i32>,
    pub source_type: SourceTypeDto,
    pub original_url: Option<String>,
    pub uploaded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateLinkDto {
    pub url: String,
    pub title: String,
    pub description: Option<String>,
    pub category_id: Option<i32>,
}

/// Multipart body accepted by the upload endpoint.
#[allow(dead_code)]
#[derive(ToSchema)]
pub struct UploadFileForm {
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
    pub description: Option<String>,
    pub category_id: Option<i32>,
}
