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
        calendar::{
            CloseDoodleDto, CreateDoodleDto, DoodleDetailDto, DoodleStatusDto, DoodleSummaryDto,
            RespondDoodleDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::doodle::{Answer, CreateDoodleParams, DoodleStatus},
        service::doodle::DoodleService,
        state::AppState,
        util::parse::parse_id,
    },
};

/// Tag for grouping scheduling poll endpoints in OpenAPI documentation
pub static CALENDAR_TAG: &str = "calendar";

#[derive(Deserialize, IntoParams)]
pub struct DoodleListQuery {
    pub status: Option<DoodleStatusDto>,
    /// Only polls created by the caller
    #[serde(default)]
    pub created_by_me: bool,
}

/// Create a scheduling poll.
///
/// Options without an id get a generated UUID. The creator comes from the token.
///
/// # Access Control
/// - Authenticated users
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - Title, description, 2 to 20 options and poll settings
///
/// # Returns
/// - `201 Created` - The created poll
/// - `400 Bad Request` - Invalid title, option count or settings
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    post,
    path = "/api/calendar/doodles",
    tag = CALENDAR_TAG,
    request_body = CreateDoodleDto,
    responses(
        (status = 201, description = "Poll created", body = DoodleDetailDto),
        (status = 400, description = "Invalid poll data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_doodle(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateDoodleDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let doodle = DoodleService::new(&state.db)
        .create(CreateDoodleParams::from_dto(payload, user.id, user.name))
        .await?;

    Ok((StatusCode::CREATED, Json(doodle.into_detail_dto())))
}

/// List polls newest first.
///
/// Active polls past their deadline are reported as expired. Private polls only show up for
/// their creator.
///
/// # Access Control
/// - Authenticated users
///
/// # Returns
/// - `200 OK` - Up to 100 poll summaries
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    get,
    path = "/api/calendar/doodles",
    tag = CALENDAR_TAG,
    params(DoodleListQuery),
    responses(
        (status = 200, description = "Poll summaries", body = Vec<DoodleSummaryDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_doodles(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<DoodleListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let doodles = DoodleService::new(&state.db)
        .list(
            &user,
            query.status.map(DoodleStatus::from),
            query.created_by_me,
        )
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            doodles
                .into_iter()
                .map(|d| d.into_summary_dto(user.id))
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Full poll with every response and per-option counts.
#[utoipa::path(
    get,
    path = "/api/calendar/doodles/{id}",
    tag = CALENDAR_TAG,
    params(("id" = i32, Path, description = "Poll ID")),
    responses(
        (status = 200, description = "The poll", body = DoodleDetailDto),
        (status = 400, description = "Invalid doodle ID format", body = ErrorDto),
        (status = 404, description = "Poll not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_doodle(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let doodle = DoodleService::new(&state.db)
        .get(&user, parse_id(&id, "doodle")?)
        .await?;

    Ok((StatusCode::OK, Json(doodle.into_detail_dto())))
}

/// Answer a poll, replacing any earlier answer of the caller.
///
/// # Access Control
/// - Authenticated users
///
/// # Returns
/// - `200 OK` - The poll with the new response
/// - `400 Bad Request` - Poll not active, deadline passed, unknown option, disallowed maybe
///   or comment, or the participant limit is reached
/// - `404 Not Found` - No such poll
#[utoipa::path(
    put,
    path = "/api/calendar/doodles/{id}/respond",
    tag = CALENDAR_TAG,
    params(("id" = i32, Path, description = "Poll ID")),
    request_body = RespondDoodleDto,
    responses(
        (status = 200, description = "Response recorded", body = DoodleDetailDto),
        (status = 400, description = "Invalid response", body = ErrorDto),
        (status = 404, description = "Poll not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn respond_doodle(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(payload): Json<RespondDoodleDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let answers = payload
        .responses
        .into_iter()
        .map(|(option_id, answer)| (option_id, Answer::from(answer)))
        .collect();

    let doodle = DoodleService::new(&state.db)
        .respond(&user, parse_id(&id, "doodle")?, answers, payload.comment)
        .await?;

    Ok((StatusCode::OK, Json(doodle.into_detail_dto())))
}

/// Close a poll on its final option. Creator only.
#[utoipa::path(
    put,
    path = "/api/calendar/doodles/{id}/close",
    tag = CALENDAR_TAG,
    params(("id" = i32, Path, description = "Poll ID")),
    request_body = CloseDoodleDto,
    responses(
        (status = 200, description = "Poll closed", body = DoodleDetailDto),
        (status = 400, description = "Invalid final option", body = ErrorDto),
        (status = 403, description = "Not the creator", body = ErrorDto),
        (status = 404, description = "Poll not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn close_doodle(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(payload): Json<CloseDoodleDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let doodle = DoodleService::new(&state.db)
        .close(&user, parse_id(&id, "doodle")?, &payload.final_option)
        .await?;

    Ok((StatusCode::OK, Json(doodle.into_detail_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/calendar/doodles/{id}",
    tag = CALENDAR_TAG,
    params(("id" = i32, Path, description = "Poll ID")),
    responses(
        (status = 204, description = "Poll deleted"),
        (status = 403, description = "Not the creator", body = ErrorDto),
        (status = 404, description = "Poll not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_doodle(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    DoodleService::new(&state.db)
        .delete(&user, parse_id(&id, "doodle")?)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
