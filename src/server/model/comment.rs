//! Comment domain models and the reply-tree assembly.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};

use crate::model::comment::{CommentDto, CommentNodeDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: i32,
    pub post_id: i32,
    pub parent_id: Option<i32>,
    pub author_id: i32,
    pub author_name: String,
    pub author_email: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn from_entity(entity: entity::comment::Model) -> Self {
        Self {
            id: entity.id,
            post_id: entity.post_id,
            parent_id: entity.parent_id,
            author_id: entity.author_id,
            author_name: entity.author_name,
            author_email: entity.author_email,
            content: entity.content,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            id: self.id,
            post_id: self.post_id,
            parent_id: self.parent_id,
            author_id: self.author_id,
            author_name: self.author_name,
            content: self.content,
            created_at: self.created_at,
        }
    }
}

/// A comment together with its direct and indirect replies.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentNode {
    pub comment: Comment,
    pub replies: Vec<CommentNode>,
}

impl CommentNode {
    pub fn into_dto(self) -> CommentNodeDto {
        CommentNodeDto {
            id: self.comment.id,
            post_id: self.comment.post_id,
            parent_id: self.comment.parent_id,
            author_id: self.comment.author_id,
            author_name: self.comment.author_name,
            content: self.comment.content,
            created_at: self.comment.created_at,
            replies: self.replies.into_iter().map(CommentNode::into_dto).collect(),
        }
    }
}

/// Assembles a flat comment list into reply trees.
///
/// First pass indexes comments by id and groups replies under their parent; second pass
/// attaches children starting from the roots. A comment whose parent is not in the list
/// becomes a root. Siblings are ordered by creation time, oldest first.
pub fn build_comment_tree(mut comments: Vec<Comment>) -> Vec<CommentNode> {
    comments.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));

    let ids: HashSet<i32> = comments.iter().map(|c| c.id).collect();
    let mut children: HashMap<i32, Vec<Comment>> = HashMap::new();
    let mut roots = Vec::new();

    for comment in comments {
        match comment.parent_id {
            Some(parent_id) if parent_id != comment.id && ids.contains(&parent_id) => {
                children.entry(parent_id).or_default().push(comment)
            }
            _ => roots.push(comment),
        }
    }

    roots
        .into_iter()
        .map(|root| attach_replies(root, &mut children))
        .collect()
}

fn attach_replies(comment: Comment, children: &mut HashMap<i32, Vec<Comment>>) -> CommentNode {
    let replies = children
        .remove(&comment.id)
        .unwrap_or_default()
        .into_iter()
        .map(|child| attach_replies(child, children))
        .collect();

    CommentNode { comment, replies }
}

/// Comment creation parameters; authorship comes from the authenticated user.
#[derive(Debug, Clone)]
pub struct CreateCommentParams {
    pub post_id: i32,
    pub parent_id: Option<i32>,
    pub author_id: i32,
    pub author_name: String,
    pub author_email: String,
    pub content: String,
}
