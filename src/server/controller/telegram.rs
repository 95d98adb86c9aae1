use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        telegram::{
            BotInfoDto, ConfigureTelegramDto, TelegramBroadcastResultDto, TelegramConfigDto,
            TelegramMessageDto, TelegramStatsDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::user::TelegramPreferencesUpdate,
        service::telegram::TelegramService,
        state::AppState,
    },
};

pub static TELEGRAM_TAG: &str = "telegram";

/// Identity of the configured bot, as reported by `getMe`.
#[utoipa::path(
    get,
    path = "/api/telegram/bot-info",
    tag = TELEGRAM_TAG,
    responses(
        (status = 200, description = "Bot identity", body = BotInfoDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 502, description = "Telegram rejected the request", body = ErrorDto),
        (status = 503, description = "Bot token not configured", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_bot_info(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let info = TelegramService::new(&state.db, &state.notifier)
        .bot_info()
        .await?;

    Ok((
        StatusCode::OK,
        Json(BotInfoDto {
            id: info.id,
            is_bot: info.is_bot,
            first_name: info.first_name,
            username: info.username,
        }),
    ))
}

/// Link a Telegram chat to the caller and set their Telegram preferences.
///
/// # Access Control
/// - Authenticated users
///
/// # Returns
/// - `200 OK` - The stored Telegram configuration
/// - `400 Bad Request` - Empty or oversized chat id
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    post,
    path = "/api/telegram/configure",
    tag = TELEGRAM_TAG,
    request_body = ConfigureTelegramDto,
    responses(
        (status = 200, description = "Telegram configured", body = TelegramConfigDto),
        (status = 400, description = "Invalid Telegram ID", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn configure(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ConfigureTelegramDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let updated = TelegramService::new(&state.db, &state.notifier)
        .configure(
            &user,
            &payload.telegram_id,
            TelegramPreferencesUpdate::from_dto(payload.preferences),
        )
        .await?;

    Ok((StatusCode::OK, Json(updated.into_telegram_config_dto())))
}

/// The caller's Telegram configuration; defaults when never configured.
#[utoipa::path(
    get,
    path = "/api/telegram/config",
    tag = TELEGRAM_TAG,
    responses(
        (status = 200, description = "Telegram configuration", body = TelegramConfigDto),
        (status = 401, description = "User not authenticated", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_config(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    Ok((StatusCode::OK, Json(user.into_telegram_config_dto())))
}

/// Send a test message to the caller's linked chat.
#[utoipa::path(
    post,
    path = "/api/telegram/test",
    tag = TELEGRAM_TAG,
    request_body = TelegramMessageDto,
    responses(
        (status = 200, description = "Test message sent", body = MessageDto),
        (status = 400, description = "Telegram not configured for this account", body = ErrorDto),
        (status = 502, description = "Telegram rejected the message", body = ErrorDto),
        (status = 503, description = "Bot token not configured", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn send_test(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<TelegramMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    TelegramService::new(&state.db, &state.notifier)
        .send_test(&user, &payload.message)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Test message sent"))))
}

/// Send an admin notice to every subscribed Telegram user.
///
/// A failed delivery to one chat is counted and does not stop the run; `success` is false
/// when any delivery failed.
///
/// # Access Control
/// - `Admin` - Only admins can broadcast
///
/// # Returns
/// - `200 OK` - Delivery counts
/// - `400 Bad Request` - Empty or oversized message
/// - `403 Forbidden` - Caller is not an admin
#[utoipa::path(
    post,
    path = "/api/telegram/admin/broadcast",
    tag = TELEGRAM_TAG,
    request_body = TelegramMessageDto,
    responses(
        (status = 200, description = "Broadcast finished", body = TelegramBroadcastResultDto),
        (status = 400, description = "Invalid message", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn broadcast(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<TelegramMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let outcome = TelegramService::new(&state.db, &state.notifier)
        .broadcast(&admin, &payload.message)
        .await?;

    Ok((StatusCode::OK, Json(outcome.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/telegram/stats",
    tag = TELEGRAM_TAG,
    responses(
        (status = 200, description = "Telegram adoption", body = TelegramStatsDto),
        (status = 403, description = "User is not an admin", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let stats = TelegramService::new(&state.db, &state.notifier)
        .stats()
        .await?;

    Ok((StatusCode::OK, Json(stats.into_dto())))
}
