//! Comment factory for creating test comment entities.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating comments on an existing post.
pub struct CommentFactory<'a> {
    db: &'a DatabaseConnection,
    post_id: i32,
    author: &'a entity::user::Model,
    parent_id: Option<i32>,
    content: String,
    created_at: DateTime<Utc>,
}

impl<'a> CommentFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, post_id: i32, author: &'a entity::user::Model) -> Self {
        Self {
            db,
            post_id,
            author,
            parent_id: None,
            content: "Nice post".to_string(),
            created_at: Utc::now(),
        }
    }

    /// Makes the comment a reply to `parent_id`.
    pub fn parent(mut self, parent_id: i32) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Shifts the creation timestamp by `seconds` relative to now.
    pub fn offset_seconds(mut self, seconds: i64) -> Self {
        self.created_at = Utc::now() + Duration::seconds(seconds);
        self
    }

    pub async fn build(self) -> Result<entity::comment::Model, DbErr> {
        entity::comment::ActiveModel {
            post_id: ActiveValue::Set(self.post_id),
            parent_id: ActiveValue::Set(self.parent_id),
            author_id: ActiveValue::Set(self.author.id),
            author_name: ActiveValue::Set(self.author.name.clone()),
            author_email: ActiveValue::Set(self.author.email.clone()),
            content: ActiveValue::Set(self.content),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a top-level comment on `post_id` by `author`.
pub async fn create_comment(
    db: &DatabaseConnection,
    post_id: i32,
    author: &entity::user::Model,
) -> Result<entity::comment::Model, DbErr> {
    CommentFactory::new(db, post_id, author).build().await
}
