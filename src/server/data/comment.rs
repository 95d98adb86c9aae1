//! Comment data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::comment::{Comment, CreateCommentParams};

/// Repository providing database operations for post comments and replies.
pub struct CommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentRepository<'a> {
    /// Creates a new CommentRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `CommentRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateCommentParams) -> Result<Comment, DbErr> {
        let entity = entity::comment::ActiveModel {
            post_id: ActiveValue::Set(params.post_id),
            parent_id: ActiveValue::Set(params.parent_id),
            author_id: ActiveValue::Set(params.author_id),
            author_name: ActiveValue::Set(params.author_name),
            author_email: ActiveValue::Set(params.author_email),
            content: ActiveValue::Set(params.content),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Comment::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Comment>, DbErr> {
        let entity = entity::prelude::Comment::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Comment::from_entity))
    }

    /// Gets every comment of a post, oldest first.
    pub async fn get_by_post(&self, post_id: i32) -> Result<Vec<Comment>, DbErr> {
        let entities = entity::prelude::Comment::find()
            .filter(entity::comment::Column::PostId.eq(post_id))
            .order_by_asc(entity::comment::Column::CreatedAt)
            .order_by_asc(entity::comment::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Comment::from_entity).collect())
    }

    /// Deletes a comment and every reply below it.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of deleted comments, replies included
    pub async fn delete_with_replies(&self, id: i32) -> Result<u64, DbErr> {
        let Some(root) = entity::prelude::Comment::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(0);
        };

        let siblings = entity::prelude::Comment::find()
            .filter(entity::comment::Column::PostId.eq(root.post_id))
            .all(self.db)
            .await?;

        let mut doomed = vec![root.id];
        let mut cursor = 0;
        while cursor < doomed.len() {
            let parent = doomed[cursor];
            doomed.extend(
                siblings
                    .iter()
                    .filter(|c| c.parent_id == Some(parent))
                    .map(|c| c.id),
            );
            cursor += 1;
        }

        let result = entity::prelude::Comment::delete_many()
            .filter(entity::comment::Column::Id.is_in(doomed))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
