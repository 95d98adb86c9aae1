use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        backup::{
            BackupCleanupDto, BackupListDto, BackupResultDto, BackupStatusDto, DownloadLinkDto,
            SchedulerStatusDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::backup::BackupService,
        state::AppState,
    },
};

/// Tag for grouping backup endpoints in OpenAPI documentation
pub static BACKUP_TAG: &str = "backup";

/// Snapshot the database and upload it to Dropbox.
///
/// Old backups beyond the newest four are removed after a successful upload.
///
/// # Access Control
/// - `Admin` - Only admins can trigger backups
///
/// # Arguments
/// - `state` - Application state containing the database connection and Dropbox client
/// - `headers` - Request headers carrying the bearer token
///
/// # Returns
/// - `200 OK` - Uploaded file name, size and Dropbox path
/// - `403 Forbidden` - Caller is not an admin
/// - `502 Bad Gateway` - Dropbox rejected the upload
/// - `503 Service Unavailable` - Dropbox is not configured
#[utoipa::path(
    post,
    path = "/api/backup/create",
    tag = BACKUP_TAG,
    responses(
        (status = 200, description = "Backup uploaded", body = BackupResultDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 502, description = "Dropbox request failed", body = ErrorDto),
        (status = 503, description = "Dropbox not configured", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_backup(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let outcome = BackupService::new(&state.db, &state.dropbox)
        .create()
        .await?;

    Ok((StatusCode::OK, Json(outcome.into_dto())))
}

/// Backups stored in Dropbox, newest first.
#[utoipa::path(
    get,
    path = "/api/backup/list",
    tag = BACKUP_TAG,
    responses(
        (status = 200, description = "Stored backups", body = BackupListDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 503, description = "Dropbox not configured", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn list_backups(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let backups = BackupService::new(&state.db, &state.dropbox)
        .list()
        .await?;

    Ok((
        StatusCode::OK,
        Json(BackupListDto {
            total: backups.len(),
            backups: backups.into_iter().map(|b| b.into_dto()).collect(),
        }),
    ))
}

/// Backup overview: configuration, newest backup, count and scheduler state.
///
/// When Dropbox is not configured the endpoint still answers, reporting no backups.
///
/// # Access Control
/// - `Admin` - Only admins can inspect backups
///
/// # Returns
/// - `200 OK` - Backup status
/// - `403 Forbidden` - Caller is not an admin
/// - `502 Bad Gateway` - Dropbox listing failed
#[utoipa::path(
    get,
    path = "/api/backup/status",
    tag = BACKUP_TAG,
    responses(
        (status = 200, description = "Backup status", body = BackupStatusDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 502, description = "Dropbox request failed", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_status(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let configured = state.dropbox.is_configured();
    let backups = if configured {
        BackupService::new(&state.db, &state.dropbox)
            .list()
            .await?
    } else {
        Vec::new()
    };

    let backup_count = backups.len();
    let last_backup = backups.into_iter().next().map(|b| b.into_dto());
    let scheduler = state.backup_scheduler.status().await.into_dto();

    Ok((
        StatusCode::OK,
        Json(BackupStatusDto {
            configured,
            last_backup,
            backup_count,
            scheduler,
        }),
    ))
}

/// Apply retention: keep the newest four backups.
#[utoipa::path(
    delete,
    path = "/api/backup/cleanup",
    tag = BACKUP_TAG,
    responses(
        (status = 200, description = "Retention applied", body = BackupCleanupDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 503, description = "Dropbox not configured", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn cleanup_backups(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let cleanup = BackupService::new(&state.db, &state.dropbox)
        .cleanup()
        .await?;

    Ok((
        StatusCode::OK,
        Json(BackupCleanupDto {
            deleted: cleanup.deleted,
            kept: cleanup.kept,
        }),
    ))
}

/// Temporary download link for a backup file.
#[utoipa::path(
    get,
    path = "/api/backup/download/{name}",
    tag = BACKUP_TAG,
    params(("name" = String, Path, description = "Backup file name")),
    responses(
        (status = 200, description = "Temporary link", body = DownloadLinkDto),
        (status = 400, description = "Invalid backup filename", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 503, description = "Dropbox not configured", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn download_backup(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let link = BackupService::new(&state.db, &state.dropbox)
        .download_link(&name)
        .await?;

    Ok((
        StatusCode::OK,
        Json(DownloadLinkDto {
            filename: name,
            link,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/backup/scheduler/status",
    tag = BACKUP_TAG,
    responses(
        (status = 200, description = "Scheduler status", body = SchedulerStatusDto),
        (status = 403, description = "User is not an admin", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_scheduler_status(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let status = state.backup_scheduler.status().await;

    Ok((StatusCode::OK, Json(status.into_dto())))
}

/// Start scheduled backups. The first run happens one interval from now.
#[utoipa::path(
    post,
    path = "/api/backup/scheduler/start",
    tag = BACKUP_TAG,
    responses(
        (status = 200, description = "Scheduler started or already running", body = MessageDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Scheduler error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn start_scheduler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let message = if state.backup_scheduler.start().await? {
        "Backup scheduler started"
    } else {
        "Backup scheduler is already running"
    };

    Ok((StatusCode::OK, Json(MessageDto::new(message))))
}

#[utoipa::path(
    post,
    path = "/api/backup/scheduler/stop",
    tag = BACKUP_TAG,
    responses(
        (status = 200, description = "Scheduler stopped or not running", body = MessageDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Scheduler error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn stop_scheduler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let message = if state.backup_scheduler.stop().await? {
        "Backup scheduler stopped"
    } else {
        "Backup scheduler is not running"
    };

    Ok((StatusCode::OK, Json(MessageDto::new(message))))
}
