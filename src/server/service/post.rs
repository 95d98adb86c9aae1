//! Blog posts.
//!
//! Anyone logged in may publish; only the author or an admin may edit or delete a post.
//! Deleting a post removes its comments.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{category::CategoryRepository, post::PostRepository},
    error::AppError,
    model::{
        post::{CreatePostParams, Post, UpdatePostParams},
        user::User,
    },
    util::validate::require_length,
};

pub struct PostService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PostService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Publishes a post.
    ///
    /// # Returns
    /// - `Ok(Post)` - The post with its category name resolved
    /// - `Err(AppError::BadRequest)` - Invalid title/content or unknown category
    pub async fn create(&self, params: CreatePostParams) -> Result<Post, AppError> {
        require_length("title", &params.title, 1, 200)?;
        require_length("content", &params.content, 1, usize::MAX)?;
        self.check_category(params.category_id).await?;

        let post = PostRepository::new(self.db).create(params).await?;

        tracing::info!("Post {} published by {}", post.id, post.author_name);

        Ok(post)
    }

    pub async fn get_all(&self, category_id: Option<i32>) -> Result<Vec<Post>, AppError> {
        Ok(PostRepository::new(self.db).get_all(category_id).await?)
    }

    pub async fn get(&self, id: i32) -> Result<Post, AppError> {
        PostRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Post not found".to_string()))
    }

    /// Applies a partial update on behalf of `actor`.
    ///
    /// # Returns
    /// - `Err(AppError::Forbidden)` - Actor is neither the author nor an admin
    pub async fn update(
        &self,
        actor: &User,
        id: i32,
        params: UpdatePostParams,
    ) -> Result<Post, AppError> {
        let post = self.get(id).await?;
        check_owner(actor, &post, "update")?;

        if let Some(title) = &params.title {
            require_length("title", title, 1, 200)?;
        }
        if let Some(content) = &params.content {
            require_length("content", content, 1, usize::MAX)?;
        }
        self.check_category(params.category_id).await?;

        PostRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("Post not found".to_string()))
    }

    /// Deletes a post and its comments on behalf of `actor`.
    pub async fn delete(&self, actor: &User, id: i32) -> Result<(), AppError> {
        let post = self.get(id).await?;
        check_owner(actor, &post, "delete")?;

        PostRepository::new(self.db).delete(id).await?;

        tracing::info!("Post {} deleted by {}", id, actor.name);

        Ok(())
    }

    async fn check_category(&self, category_id: Option<i32>) -> Result<(), AppError> {
        if let Some(category_id) = category_id {
            if CategoryRepository::new(self.db)
                .find_by_id(category_id)
                .await?
                .is_none()
            {
                return Err(AppError::BadRequest("Category not found".to_string()));
            }
        }
        Ok(())
    }
}

fn check_owner(actor: &User, post: &Post, action: &str) -> Result<(), AppError> {
    if post.author_id == actor.id || actor.is_admin() {
        return Ok(());
    }
    Err(AppError::Forbidden(format!(
        "Not authorized to {} this post",
        action
    )))
}
