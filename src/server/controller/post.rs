use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        post::{CreatePostDto, PostDto, UpdatePostDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::post::{CreatePostParams, UpdatePostParams},
        service::post::PostService,
        state::AppState,
        util::parse::parse_id,
    },
};

pub static POST_TAG: &str = "post";

#[derive(Deserialize, IntoParams)]
pub struct CategoryFilter {
    /// Only return entries in this category
    pub category_id: Option<i32>,
}

/// Get posts newest first.
#[utoipa::path(
    get,
    path = "/api/posts",
    tag = POST_TAG,
    params(CategoryFilter),
    responses(
        (status = 200, description = "Posts, newest first", body = Vec<PostDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_posts(
    State(state): State<AppState>,
    Query(filter): Query<CategoryFilter>,
) -> Result<impl IntoResponse, AppError> {
    let posts = PostService::new(&state.db).get_all(filter.category_id).await?;

    Ok((
        StatusCode::OK,
        Json(posts.into_iter().map(|p| p.into_dto()).collect::<Vec<_>>()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/posts/{id}",
    tag = POST_TAG,
    params(("id" = i32, Path, description = "Post ID")),
    responses(
        (status = 200, description = "The post", body = PostDto),
        (status = 400, description = "Invalid post ID format", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto)
    ),
)]
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let post = PostService::new(&state.db).get(parse_id(&id, "post")?).await?;

    Ok((StatusCode::OK, Json(post.into_dto())))
}

/// Publish a post.
///
/// The author comes from the token. Subscribers are notified by email and Telegram in the
/// background once the post is stored.
///
/// # Access Control
/// - Authenticated users
///
/// # Returns
/// - `201 Created` - The stored post
/// - `400 Bad Request` - Invalid title/content or unknown category
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    post,
    path = "/api/posts",
    tag = POST_TAG,
    request_body = CreatePostDto,
    responses(
        (status = 201, description = "Post created", body = PostDto),
        (status = 400, description = "Invalid post data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreatePostDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let post = PostService::new(&state.db)
        .create(CreatePostParams::from_dto(payload, user.id, user.name))
        .await?;

    state.notifier.post_created(post.clone());

    Ok((StatusCode::CREATED, Json(post.into_dto())))
}

/// Edit a post.
///
/// # Access Control
/// - Author or `Admin`
///
/// # Returns
/// - `200 OK` - Updated post
/// - `400 Bad Request` - Invalid data
/// - `403 Forbidden` - Caller is neither the author nor an admin
/// - `404 Not Found` - No such post
#[utoipa::path(
    put,
    path = "/api/posts/{id}",
    tag = POST_TAG,
    params(("id" = i32, Path, description = "Post ID")),
    request_body = UpdatePostDto,
    responses(
        (status = 200, description = "Post updated", body = PostDto),
        (status = 400, description = "Invalid post data", body = ErrorDto),
        (status = 403, description = "Not the author", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(payload): Json<UpdatePostDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let post = PostService::new(&state.db)
        .update(
            &user,
            parse_id(&id, "post")?,
            UpdatePostParams::from_dto(payload),
        )
        .await?;

    Ok((StatusCode::OK, Json(post.into_dto())))
}

/// Delete a post together with its comments.
#[utoipa::path(
    delete,
    path = "/api/posts/{id}",
    tag = POST_TAG,
    params(("id" = i32, Path, description = "Post ID")),
    responses(
        (status = 204, description = "Post deleted"),
        (status = 403, description = "Not the author", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    PostService::new(&state.db)
        .delete(&user, parse_id(&id, "post")?)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
