use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        comment::{CommentDto, CommentNodeDto, CreateCommentDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::comment::CommentService,
        state::AppState, util::parse::parse_id,
    },
};

pub static COMMENT_TAG: &str = "comment";

/// Flat comment list of a post, oldest first.
#[utoipa::path(
    get,
    path = "/api/comments/post/{post_id}",
    tag = COMMENT_TAG,
    params(("post_id" = i32, Path, description = "Post ID")),
    responses(
        (status = 200, description = "Comments, oldest first", body = Vec<CommentDto>),
        (status = 400, description = "Invalid post ID format", body = ErrorDto)
    ),
)]
pub async fn get_post_comments(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let comments = CommentService::new(&state.db)
        .get_by_post(parse_id(&post_id, "post")?)
        .await?;

    Ok((
        StatusCode::OK,
        Json(comments.into_iter().map(|c| c.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Comments of a post nested by reply.
///
/// Replies whose parent no longer exists are returned as roots.
#[utoipa::path(
    get,
    path = "/api/comments/post/{post_id}/tree",
    tag = COMMENT_TAG,
    params(("post_id" = i32, Path, description = "Post ID")),
    responses(
        (status = 200, description = "Comment tree", body = Vec<CommentNodeDto>),
        (status = 400, description = "Invalid post ID format", body = ErrorDto)
    ),
)]
pub async fn get_post_comment_tree(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let tree = CommentService::new(&state.db)
        .get_tree(parse_id(&post_id, "post")?)
        .await?;

    Ok((
        StatusCode::OK,
        Json(tree.into_iter().map(|n| n.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Comment on a post or reply to another comment.
///
/// Reply and new-comment emails are queued in the background after the comment is stored.
///
/// # Access Control
/// - Authenticated users
///
/// # Arguments
/// - `post_id` - Post being commented on
/// - `payload` - Content and the optional parent comment
///
/// # Returns
/// - `201 Created` - The stored comment
/// - `400 Bad Request` - Invalid content, or the parent is missing or on another post
/// - `404 Not Found` - No such post
#[utoipa::path(
    post,
    path = "/api/comments/post/{post_id}",
    tag = COMMENT_TAG,
    params(("post_id" = i32, Path, description = "Post ID")),
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Comment created", body = CommentDto),
        (status = 400, description = "Invalid comment data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(post_id): Path<String>,
    Json(payload): Json<CreateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let created = CommentService::new(&state.db)
        .create(
            &user,
            parse_id(&post_id, "post")?,
            payload.content,
            payload.parent_id,
        )
        .await?;

    let dto = created.comment.clone().into_dto();
    state
        .notifier
        .comment_created(created.post, created.comment, created.parent);

    Ok((StatusCode::CREATED, Json(dto)))
}

/// Delete a comment and its replies.
#[utoipa::path(
    delete,
    path = "/api/comments/{id}",
    tag = COMMENT_TAG,
    params(("id" = i32, Path, description = "Comment ID")),
    responses(
        (status = 204, description = "Comment deleted"),
        (status = 403, description = "Not the author", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    CommentService::new(&state.db)
        .delete(&user, parse_id(&id, "comment")?)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
