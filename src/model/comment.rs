use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentDto {
    pub id: i32,
    pub post_id: i32,
    pub parent_id: Option<i32>,
    pub author_id: i32,
    pub author_name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Comment with its nested replies.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentNodeDto {
    pub id: i32,
    pub post_id: i32,
    pub parent_id: Option<i32>,
    pub author_id: i32,
    pub author_name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    #[schema(no_recursion)]
    pub replies: Vec<CommentNodeDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateCommentDto {
    pub content: String,
    pub parent_id: Option<i32>,
}
