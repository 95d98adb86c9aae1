use chrono::{DateTime, Utc};

use crate::model::post::{CreatePostDto, PostDto, UpdatePostDto};

/// Post with its category name resolved at read time.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub author_id: i32,
    pub author_name: String,
    pub category_id: Option<i32>,
    pub category_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    pub fn from_entity(
        entity: entity::post::Model,
        category: Option<entity::category::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            content: entity.content,
            author_id: entity.author_id,
            author_name: entity.author_name,
            category_id: entity.category_id,
            category_name: category.map(|c| c.name),
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> PostDto {
        PostDto {
            id: self.id,
            title: self.title,
            content: self.content,
            author_id: self.author_id,
            author_name: self.author_name,
            category_id: self.category_id,
            category_name: self.category_name,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Post creation parameters; authorship comes from the authenticated user.
#[derive(Debug, Clone)]
pub struct CreatePostParams {
    pub title: String,
    pub content: String,
    pub category_id: Option<i32>,
    pub author_id: i32,
    pub author_name: String,
}

impl CreatePostParams {
    pub fn from_dto(dto: CreatePostDto, author_id: i32, author_name: String) -> Self {
        Self {
            title: dto.title.trim().to_string(),
            content: dto.content,
            category_id: dto.category_id,
            author_id,
            author_name,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdatePostParams {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category_id: Option<i32>,
}

impl UpdatePostParams {
    pub fn from_dto(dto: UpdatePostDto) -> Self {
        Self {
            title: dto.title.map(|title| title.trim().to_string()),
            content: dto.content,
            category_id: dto.category_id,
        }
    }
}
