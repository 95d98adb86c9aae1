//! Post factory for creating test post entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test posts authored by an existing user.
pub struct PostFactory<'a> {
    db: &'a DatabaseConnection,
    author: &'a entity::user::Model,
    title: String,
    content: String,
    category_id: Option<i32>,
    created_at: DateTime<Utc>,
}

impl<'a> PostFactory<'a> {
    /// Creates a new PostFactory with title `"Post {id}"` and placeholder content.
    pub fn new(db: &'a DatabaseConnection, author: &'a entity::user::Model) -> Self {
        let id = next_id();
        Self {
            db,
            author,
            title: format!("Post {}", id),
            content: format!("Content of post {}", id),
            category_id: None,
            created_at: Utc::now(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn category_id(mut self, category_id: i32) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Overrides the creation timestamp, useful for ordering tests.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::post::Model, DbErr> {
        entity::post::ActiveModel {
            title: ActiveValue::Set(self.title),
            content: ActiveValue::Set(self.content),
            author_id: ActiveValue::Set(self.author.id),
            author_name: ActiveValue::Set(self.author.name.clone()),
            category_id: ActiveValue::Set(self.category_id),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a post with default values authored by `author`.
pub async fn create_post(
    db: &DatabaseConnection,
    author: &entity::user::Model,
) -> Result<entity::post::Model, DbErr> {
    PostFactory::new(db, author).build().await
}
