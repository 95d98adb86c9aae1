use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NewsDto {
    pub id: i32,
    pub title: String,
    pub url: String,
    pub comment: Option<String>,
    pub created_by: i32,
    pub created_by_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateNewsDto {
    pub title: String,
    pub url: String,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateNewsDto {
    pub title: Option<String>,
    pub url: Option<String>,
    pub comment: Option<String>,
}
