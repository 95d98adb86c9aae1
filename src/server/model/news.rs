use chrono::{DateTime, Utc};

use crate::model::news::{NewsDto, UpdateNewsDto};

#[derive(Debug, Clone, PartialEq)]
pub struct News {
    pub id: i32,
    pub title: String,
    pub url: String,
    pub comment: Option<String>,
    pub created_by: i32,
    pub created_by_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl News {
    pub fn from_entity(entity: entity::news::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            url: entity.url,
            comment: entity.comment,
            created_by: entity.created_by,
            created_by_name: entity.created_by_name,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> NewsDto {
        NewsDto {
            id: self.id,
            title: self.title,
            url: self.url,
            comment: self.comment,
            created_by: self.created_by,
            created_by_name: self.created_by_name,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateNewsParams {
    pub title: String,
    pub url: String,
    pub comment: Option<String>,
    pub created_by: i32,
    pub created_by_name: String,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateNewsParams {
    pub title: Option<String>,
    pub url: Option<String>,
    pub comment: Option<String>,
}

impl UpdateNewsParams {
    pub fn from_dto(dto: UpdateNewsDto) -> Self {
        Self {
            title: dto.title.map(|title| title.trim().to_string()),
            url: dto.url.map(|url| url.trim().to_string()),
            comment: dto.comment,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.url.is_none() && self.comment.is_none()
    }
}
