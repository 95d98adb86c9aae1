use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        chat::{ChatMessageDto, CreateChatMessageDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::chat::ChatService,
        state::AppState,
    },
};

pub static CHAT_TAG: &str = "chat";

#[derive(Deserialize, IntoParams)]
pub struct HistoryParams {
    /// Number of messages, 1..=200 (default: 50)
    pub limit: Option<u64>,
}

/// Newest chat messages in chronological order.
#[utoipa::path(
    get,
    path = "/api/chat/messages",
    tag = CHAT_TAG,
    params(HistoryParams),
    responses(
        (status = 200, description = "Chat history", body = Vec<ChatMessageDto>),
        (status = 400, description = "Limit out of range", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_messages(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<HistoryParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let messages = ChatService::new(&state.db, &state.hub, &state.notifier)
        .recent(params.limit)
        .await?;

    Ok((
        StatusCode::OK,
        Json(messages.into_iter().map(|m| m.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Post a chat message.
///
/// Takes the same path as a websocket `send_message`: the message is stored, relayed to
/// every connected socket as `receive_message` and may trigger the admin activity alert.
///
/// # Access Control
/// - Authenticated users
///
/// # Returns
/// - `201 Created` - The stored message
/// - `400 Bad Request` - Empty or oversized message
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    post,
    path = "/api/chat/messages",
    tag = CHAT_TAG,
    request_body = CreateChatMessageDto,
    responses(
        (status = 201, description = "Message stored", body = ChatMessageDto),
        (status = 400, description = "Invalid message", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn send_message(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateChatMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let message = ChatService::new(&state.db, &state.hub, &state.notifier)
        .send(&user, &payload.message, None)
        .await?;

    Ok((StatusCode::CREATED, Json(message.into_dto())))
}
