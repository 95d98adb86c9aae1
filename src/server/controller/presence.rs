use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, presence::OnlineUserDto},
    server::{
        error::AppError, middleware::auth::AuthGuard, service::presence::PresenceService,
        state::AppState,
    },
};

pub static PRESENCE_TAG: &str = "presence";

/// Active users seen within the last five minutes.
///
/// The caller counts as online too, since authenticating refreshes their presence.
#[utoipa::path(
    get,
    path = "/api/presence/online",
    tag = PRESENCE_TAG,
    responses(
        (status = 200, description = "Users currently online", body = Vec<OnlineUserDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_online_users(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let users = PresenceService::new(&state.db).online_users().await?;

    Ok((
        StatusCode::OK,
        Json(
            users
                .into_iter()
                .map(|u| u.into_online_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}
