//! Post data repository for database operations.
//!
//! This module provides the `PostRepository` for managing posts. Reads join the post's
//! category so the category name is resolved at read time rather than stored.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::post::{CreatePostParams, Post, UpdatePostParams};

/// Repository providing database operations for posts.
pub struct PostRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PostRepository<'a> {
    /// Creates a new PostRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `PostRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new post and returns it with its category name resolved.
    ///
    /// # Arguments
    /// - `params` - Post content and authorship
    ///
    /// # Returns
    /// - `Ok(Post)` - The created post
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreatePostParams) -> Result<Post, DbErr> {
        let now = Utc::now();
        let entity = entity::post::ActiveModel {
            title: ActiveValue::Set(params.title),
            content: ActiveValue::Set(params.content),
            author_id: ActiveValue::Set(params.author_id),
            author_name: ActiveValue::Set(params.author_name),
            category_id: ActiveValue::Set(params.category_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let category = match entity.category_id {
            Some(category_id) => {
                entity::prelude::Category::find_by_id(category_id)
                    .one(self.db)
                    .await?
            }
            None => None,
        };

        Ok(Post::from_entity(entity, category))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Post>, DbErr> {
        let result = entity::prelude::Post::find_by_id(id)
            .find_also_related(entity::prelude::Category)
            .one(self.db)
            .await?;

        Ok(result.map(|(post, category)| Post::from_entity(post, category)))
    }

    /// Gets posts newest first.
    ///
    /// # Arguments
    /// - `category_id` - Restrict to posts filed under this category
    pub async fn get_all(&self, category_id: Option<i32>) -> Result<Vec<Post>, DbErr> {
        let mut query = entity::prelude::Post::find();
        if let Some(category_id) = category_id {
            query = query.filter(entity::post::Column::CategoryId.eq(category_id));
        }

        let results = query
            .order_by_desc(entity::post::Column::CreatedAt)
            .order_by_desc(entity::post::Column::Id)
            .find_also_related(entity::prelude::Category)
            .all(self.db)
            .await?;

        Ok(results
            .into_iter()
            .map(|(post, category)| Post::from_entity(post, category))
            .collect())
    }

    /// Applies a partial update to a post.
    ///
    /// # Returns
    /// - `Ok(Some(Post))` - The updated post
    /// - `Ok(None)` - No post with that id
    pub async fn update(&self, id: i32, params: UpdatePostParams) -> Result<Option<Post>, DbErr> {
        let Some(existing) = entity::prelude::Post::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        if let Some(title) = params.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(content) = params.content {
            active.content = ActiveValue::Set(content);
        }
        if let Some(category_id) = params.category_id {
            active.category_id = ActiveValue::Set(Some(category_id));
        }
        active.updated_at = ActiveValue::Set(Utc::now());
        active.update(self.db).await?;

        self.find_by_id(id).await
    }

    /// Deletes a post together with all of its comments.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of deleted posts (0 when the post does not exist)
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::Comment::delete_many()
            .filter(entity::comment::Column::PostId.eq(id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::Post::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(result.rows_affected)
    }
}
