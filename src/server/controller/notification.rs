use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        notification::{
            BroadcastEmailDto, BroadcastResultDto, BulkPreferencesDto, BulkUpdateResultDto,
            RecipientSummaryDto, UpdateEmailPreferencesDto, UserPreferencesDto,
        },
        user::EmailPreferencesDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::user::EmailPreferencesUpdate,
        service::notification::NotificationService,
        state::AppState,
        util::parse::parse_id,
    },
};

/// Tag for grouping email notification endpoints in OpenAPI documentation
pub static NOTIFICATION_TAG: &str = "notification";

/// Email an announcement to active users.
///
/// Recipients are the users subscribed to admin notifications unless `include_unsubscribed`
/// is set. Delivery happens in batches of 50 before the response is returned, so the counts
/// reflect what the SMTP server accepted.
///
/// # Access Control
/// - `Admin` - Only admins can broadcast
///
/// # Arguments
/// - `state` - Application state containing the database connection and notifier
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - Subject, message and whether to ignore the subscription preference
///
/// # Returns
/// - `200 OK` - Broadcast counts
/// - `400 Bad Request` - Empty subject or message
/// - `403 Forbidden` - Caller is not an admin
#[utoipa::path(
    post,
    path = "/api/notifications/admin/broadcast",
    tag = NOTIFICATION_TAG,
    request_body = BroadcastEmailDto,
    responses(
        (status = 200, description = "Broadcast finished", body = BroadcastResultDto),
        (status = 400, description = "Invalid broadcast", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn broadcast_email(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<BroadcastEmailDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let outcome = NotificationService::new(&state.db, &state.notifier)
        .broadcast(
            &payload.subject,
            &payload.message,
            payload.include_unsubscribed,
            &admin.name,
        )
        .await?;

    Ok((StatusCode::OK, Json(outcome.into_dto())))
}

/// Subscriber counts per preference and the admin/new-post recipient lists.
#[utoipa::path(
    get,
    path = "/api/notifications/admin/recipients",
    tag = NOTIFICATION_TAG,
    responses(
        (status = 200, description = "Recipient summary", body = RecipientSummaryDto),
        (status = 403, description = "User is not an admin", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_recipients(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let summary = NotificationService::new(&state.db, &state.notifier)
        .recipients()
        .await?;

    Ok((StatusCode::OK, Json(summary.into_dto())))
}

/// The caller's email preferences.
#[utoipa::path(
    get,
    path = "/api/notifications/preferences",
    tag = NOTIFICATION_TAG,
    responses(
        (status = 200, description = "Email preferences", body = EmailPreferencesDto),
        (status = 401, description = "User not authenticated", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_preferences(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    Ok((StatusCode::OK, Json(user.email_preferences.into_dto())))
}

/// Partially update the caller's email preferences.
#[utoipa::path(
    put,
    path = "/api/notifications/preferences",
    tag = NOTIFICATION_TAG,
    request_body = UpdateEmailPreferencesDto,
    responses(
        (status = 200, description = "Updated preferences", body = EmailPreferencesDto),
        (status = 401, description = "User not authenticated", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_preferences(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpdateEmailPreferencesDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let updated = NotificationService::new(&state.db, &state.notifier)
        .update_preferences(user.id, EmailPreferencesUpdate::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(updated.email_preferences.into_dto())))
}

/// Update another user's email preferences.
#[utoipa::path(
    put,
    path = "/api/notifications/admin/users/{id}/preferences",
    tag = NOTIFICATION_TAG,
    params(("id" = i32, Path, description = "User ID")),
    request_body = UpdateEmailPreferencesDto,
    responses(
        (status = 200, description = "Updated preferences", body = UserPreferencesDto),
        (status = 400, description = "Invalid user ID format", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_user_preferences(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(payload): Json<UpdateEmailPreferencesDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let user = NotificationService::new(&state.db, &state.notifier)
        .update_preferences(
            parse_id(&id, "user")?,
            EmailPreferencesUpdate::from_dto(payload),
        )
        .await?;

    Ok((StatusCode::OK, Json(user.into_preferences_dto())))
}

/// Apply one preference change to several users.
#[utoipa::path(
    post,
    path = "/api/notifications/admin/preferences/bulk-update",
    tag = NOTIFICATION_TAG,
    request_body = BulkPreferencesDto,
    responses(
        (status = 200, description = "Preferences updated", body = BulkUpdateResultDto),
        (status = 400, description = "No users or no preferences given", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn bulk_update_preferences(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<BulkPreferencesDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let updated_count = NotificationService::new(&state.db, &state.notifier)
        .bulk_update(
            &payload.user_ids,
            EmailPreferencesUpdate::from_dto(payload.preferences),
        )
        .await?;

    Ok((StatusCode::OK, Json(BulkUpdateResultDto { updated_count })))
}

/// Every user's email preferences.
#[utoipa::path(
    get,
    path = "/api/notifications/admin/users/preferences",
    tag = NOTIFICATION_TAG,
    responses(
        (status = 200, description = "Preferences of every user", body = Vec<UserPreferencesDto>),
        (status = 403, description = "User is not an admin", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_all_preferences(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let users = NotificationService::new(&state.db, &state.notifier)
        .all_preferences()
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            users
                .into_iter()
                .map(|u| u.into_preferences_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}
