use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        news::{CreateNewsDto, NewsDto, UpdateNewsDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::news::{CreateNewsParams, UpdateNewsParams},
        service::news::NewsService,
        state::AppState,
        util::parse::parse_id,
    },
};

pub static NEWS_TAG: &str = "news";

#[utoipa::path(
    get,
    path = "/api/news",
    tag = NEWS_TAG,
    responses(
        (status = 200, description = "News, newest first", body = Vec<NewsDto>)
    ),
)]
pub async fn get_news(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let news = NewsService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(news.into_iter().map(|n| n.into_dto()).collect::<Vec<_>>()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/news/{id}",
    tag = NEWS_TAG,
    params(("id" = i32, Path, description = "News ID")),
    responses(
        (status = 200, description = "The news entry", body = NewsDto),
        (status = 400, description = "Invalid news ID format", body = ErrorDto),
        (status = 404, description = "News not found", body = ErrorDto)
    ),
)]
pub async fn get_news_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let news = NewsService::new(&state.db)
        .get(parse_id(&id, "news")?)
        .await?;

    Ok((StatusCode::OK, Json(news.into_dto())))
}

/// Share a news link.
///
/// # Access Control
/// - Authenticated users
///
/// # Returns
/// - `201 Created` - The stored entry
/// - `400 Bad Request` - Invalid title, URL or comment
#[utoipa::path(
    post,
    path = "/api/news",
    tag = NEWS_TAG,
    request_body = CreateNewsDto,
    responses(
        (status = 201, description = "News created", body = NewsDto),
        (status = 400, description = "Invalid news data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_news(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateNewsDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let params = CreateNewsParams {
        title: payload.title,
        url: payload.url,
        comment: payload.comment,
        created_by: user.id,
        created_by_name: user.name.clone(),
    };

    let news = NewsService::new(&state.db).create(&user, params).await?;

    Ok((StatusCode::CREATED, Json(news.into_dto())))
}

/// Edit a news entry.
///
/// # Access Control
/// - Creator or `Admin`
///
/// # Returns
/// - `200 OK` - Updated entry
/// - `400 Bad Request` - "No fields to update" or an invalid field
/// - `403 Forbidden` - Caller is neither the creator nor an admin
/// - `404 Not Found` - No such entry
#[utoipa::path(
    put,
    path = "/api/news/{id}",
    tag = NEWS_TAG,
    params(("id" = i32, Path, description = "News ID")),
    request_body = UpdateNewsDto,
    responses(
        (status = 200, description = "News updated", body = NewsDto),
        (status = 400, description = "Invalid news data", body = ErrorDto),
        (status = 403, description = "Not the creator", body = ErrorDto),
        (status = 404, description = "News not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_news(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(payload): Json<UpdateNewsDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let news = NewsService::new(&state.db)
        .update(
            &user,
            parse_id(&id, "news")?,
            UpdateNewsParams::from_dto(payload),
        )
        .await?;

    Ok((StatusCode::OK, Json(news.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/news/{id}",
    tag = NEWS_TAG,
    params(("id" = i32, Path, description = "News ID")),
    responses(
        (status = 204, description = "News deleted"),
        (status = 403, description = "Not the creator", body = ErrorDto),
        (status = 404, description = "News not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_news(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    NewsService::new(&state.db)
        .delete(&user, parse_id(&id, "news")?)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
