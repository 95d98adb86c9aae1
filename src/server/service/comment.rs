//! Comments and threaded replies on posts.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{comment::CommentRepository, post::PostRepository},
    error::AppError,
    model::{
        comment::{build_comment_tree, Comment, CommentNode, CreateCommentParams},
        post::Post,
        user::User,
    },
    util::validate::require_length,
};

/// A stored comment together with what notifications need to know about it.
pub struct CreatedComment {
    pub comment: Comment,
    pub post: Post,
    pub parent: Option<Comment>,
}

pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Flat list for a post, oldest first.
    pub async fn get_by_post(&self, post_id: i32) -> Result<Vec<Comment>, AppError> {
        Ok(CommentRepository::new(self.db).get_by_post(post_id).await?)
    }

    /// Nested reply tree for a post.
    pub async fn get_tree(&self, post_id: i32) -> Result<Vec<CommentNode>, AppError> {
        let comments = self.get_by_post(post_id).await?;

        Ok(build_comment_tree(comments))
    }

    /// Adds a comment, or a reply when `parent_id` is given.
    ///
    /// # Returns
    /// - `Ok(CreatedComment)` - Stored comment with its post and parent
    /// - `Err(AppError::NotFound)` - The post does not exist
    /// - `Err(AppError::BadRequest)` - Invalid content, or the parent is missing or belongs
    ///   to another post
    pub async fn create(
        &self,
        author: &User,
        post_id: i32,
        content: String,
        parent_id: Option<i32>,
    ) -> Result<CreatedComment, AppError> {
        require_length("content", &content, 1, 1000)?;

        let post = PostRepository::new(self.db)
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;

        let repo = CommentRepository::new(self.db);
        let parent = match parent_id {
            Some(parent_id) => match repo.find_by_id(parent_id).await? {
                Some(parent) if parent.post_id == post_id => Some(parent),
                Some(_) => {
                    return Err(AppError::BadRequest(
                        "Parent comment belongs to a different post".to_string(),
                    ))
                }
                None => {
                    return Err(AppError::BadRequest(
                        "Parent comment not found".to_string(),
                    ))
                }
            },
            None => None,
        };

        let comment = repo
            .create(CreateCommentParams {
                post_id,
                parent_id,
                author_id: author.id,
                author_name: author.name.clone(),
                author_email: author.email.clone(),
                content,
            })
            .await?;

        Ok(CreatedComment {
            comment,
            post,
            parent,
        })
    }

    /// Deletes a comment and its replies on behalf of `actor`.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - No such comment
    /// - `Err(AppError::Forbidden)` - Actor is neither the author nor an admin
    pub async fn delete(&self, actor: &User, id: i32) -> Result<(), AppError> {
        let repo = CommentRepository::new(self.db);
        let comment = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Comment not found".to_string()))?;

        if comment.author_id != actor.id && !actor.is_admin() {
            return Err(AppError::Forbidden(
                "Not authorized to delete this comment".to_string(),
            ));
        }

        let removed = repo.delete_with_replies(id).await?;
        tracing::debug!("Comment {} deleted with {} rows", id, removed);

        Ok(())
    }
}
