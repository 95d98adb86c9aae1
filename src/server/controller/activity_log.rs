use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::json;
use utoipa::IntoParams;

use crate::{
    model::{
        activity_log::{
            ActivityLogDto, ActivityStatsDto, BulkDeleteLogsDto, BulkDeleteResultDto,
            CleanupResultDto, EventTypeDto,
        },
        api::ErrorDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::activity_log::{ActivityLogFilter, EventType},
        service::activity_log::ActivityLogService,
        state::AppState,
        util::request::RequestMeta,
    },
};

/// Tag for grouping activity log endpoints in OpenAPI documentation
pub static ACTIVITY_LOG_TAG: &str = "activity-log";

#[derive(Deserialize, IntoParams)]
pub struct LogQuery {
    /// Case-insensitive substring of the username
    pub username: Option<String>,
    pub event_type: Option<EventTypeDto>,
    pub success: Option<bool>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    /// 1..=1000 (default: 100)
    pub limit: Option<u64>,
    #[serde(default)]
    pub offset: u64,
}

#[derive(Deserialize, IntoParams)]
pub struct DaysQuery {
    pub days: Option<i64>,
}

#[derive(Deserialize, IntoParams)]
pub struct LimitQuery {
    pub limit: Option<u64>,
}

/// List activity log entries newest first.
///
/// # Access Control
/// - `Admin` - Only admins can read activity logs
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `query` - Username, event type, outcome and date filters plus pagination
///
/// # Returns
/// - `200 OK` - Matching entries
/// - `400 Bad Request` - Limit out of range
/// - `403 Forbidden` - Caller is not an admin
#[utoipa::path(
    get,
    path = "/api/activity-logs",
    tag = ACTIVITY_LOG_TAG,
    params(LogQuery),
    responses(
        (status = 200, description = "Activity log entries", body = Vec<ActivityLogDto>),
        (status = 400, description = "Invalid filter", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_logs(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<LogQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let filter = ActivityLogFilter {
        username: query.username.filter(|u| !u.trim().is_empty()),
        event_type: query.event_type.map(EventType::from),
        success: query.success,
        start_date: query.start_date,
        end_date: query.end_date,
        limit: query.limit.unwrap_or(100),
        offset: query.offset,
    };

    let logs = ActivityLogService::new(&state.db).list(filter).await?;

    Ok((
        StatusCode::OK,
        Json(logs.into_iter().map(|l| l.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Event totals for the last `days` days (1..=365, default 30).
#[utoipa::path(
    get,
    path = "/api/activity-logs/stats",
    tag = ACTIVITY_LOG_TAG,
    params(DaysQuery),
    responses(
        (status = 200, description = "Activity statistics", body = ActivityStatsDto),
        (status = 400, description = "Days out of range", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<DaysQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let stats = ActivityLogService::new(&state.db)
        .stats(query.days.unwrap_or(30))
        .await?;

    Ok((StatusCode::OK, Json(stats.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/activity-logs/users/{username}",
    tag = ACTIVITY_LOG_TAG,
    params(
        ("username" = String, Path, description = "Exact username"),
        LimitQuery
    ),
    responses(
        (status = 200, description = "Entries of the user", body = Vec<ActivityLogDto>),
        (status = 403, description = "User is not an admin", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_user_logs(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(username): Path<String>,
    Query(query): Query<LimitQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let logs = ActivityLogService::new(&state.db)
        .user_logs(&username, query.limit.unwrap_or(50))
        .await?;

    Ok((
        StatusCode::OK,
        Json(logs.into_iter().map(|l| l.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Delete entries older than `days` days (30..=365, default 90).
#[utoipa::path(
    delete,
    path = "/api/activity-logs/cleanup",
    tag = ACTIVITY_LOG_TAG,
    params(DaysQuery),
    responses(
        (status = 200, description = "Old entries removed", body = CleanupResultDto),
        (status = 400, description = "Days out of range", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn cleanup_logs(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<DaysQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let (deleted_count, cutoff_date) = ActivityLogService::new(&state.db)
        .cleanup(query.days.unwrap_or(90))
        .await?;

    Ok((
        StatusCode::OK,
        Json(CleanupResultDto {
            deleted_count,
            cutoff_date,
        }),
    ))
}

/// Delete every entry of the given users.
///
/// The deletion itself is recorded as an `admin_action` entry for the calling admin.
///
/// # Access Control
/// - `Admin` - Only admins can delete activity logs
///
/// # Returns
/// - `200 OK` - Total and per-user deletion counts
/// - `400 Bad Request` - No usernames given
/// - `403 Forbidden` - Caller is not an admin
#[utoipa::path(
    delete,
    path = "/api/activity-logs/users/bulk",
    tag = ACTIVITY_LOG_TAG,
    request_body = BulkDeleteLogsDto,
    responses(
        (status = 200, description = "Entries removed", body = BulkDeleteResultDto),
        (status = 400, description = "No usernames provided", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn bulk_delete_logs(
    State(state): State<AppState>,
    headers: HeaderMap,
    meta: RequestMeta,
    Json(payload): Json<BulkDeleteLogsDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let service = ActivityLogService::new(&state.db);
    let (deleted_count, deletion_summary) = service.bulk_delete(&payload.usernames).await?;

    service
        .record(
            &admin.name,
            EventType::AdminAction,
            &meta,
            true,
            Some(json!({
                "action": "bulk_delete_activity_logs",
                "usernames": payload.usernames,
                "deleted_count": deleted_count,
            })),
        )
        .await;

    Ok((
        StatusCode::OK,
        Json(BulkDeleteResultDto {
            deleted_count,
            deletion_summary,
        }),
    ))
}
