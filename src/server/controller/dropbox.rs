use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        backup::{DropboxAuthDto, DropboxCallbackDto, DropboxRefreshDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            session::CsrfSession,
        },
        state::AppState,
    },
};

pub static DROPBOX_TAG: &str = "dropbox";

/// Query parameters for the OAuth callback endpoint.
///
/// # Fields
/// - `state` - CSRF protection token that must match the value stored in the session
/// - `code` - Authorization code used to exchange for tokens
#[derive(Deserialize, IntoParams)]
pub struct CallbackParams {
    /// CSRF state token to be validated against the session value.
    pub state: String,
    /// Authorization code from Dropbox for token exchange.
    pub code: String,
}

/// Build the Dropbox consent URL for offline access.
///
/// The generated CSRF state is stored in the session and checked by the callback.
///
/// # Access Control
/// - `Admin` - Only admins can connect the backup account
///
/// # Returns
/// - `200 OK` - URL the operator should open
/// - `403 Forbidden` - Caller is not an admin
/// - `503 Service Unavailable` - Dropbox app credentials are not configured
#[utoipa::path(
    get,
    path = "/api/dropbox/auth",
    tag = DROPBOX_TAG,
    responses(
        (status = 200, description = "Authorization URL", body = DropboxAuthDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 503, description = "Dropbox not configured", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn authorize(
    State(state): State<AppState>,
    headers: HeaderMap,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let (url, csrf_token) = state.dropbox.authorize_url()?;

    CsrfSession::new(&session)
        .set_state(csrf_token.secret().clone())
        .await?;

    Ok((
        StatusCode::OK,
        Json(DropboxAuthDto {
            authorization_url: url.to_string(),
        }),
    ))
}

/// Finish the Dropbox consent flow.
///
/// Validates the CSRF state, exchanges the code and hands the refresh token back so the
/// operator can store it as `DROPBOX_REFRESH_TOKEN`.
///
/// # Access Control
/// - Public; protected by the one-time CSRF state
///
/// # Returns
/// - `200 OK` - Refresh token to configure
/// - `400 Bad Request` - CSRF state missing or mismatched
/// - `502 Bad Gateway` - Dropbox rejected the code
#[utoipa::path(
    get,
    path = "/api/dropbox/callback",
    tag = DROPBOX_TAG,
    params(CallbackParams),
    responses(
        (status = 200, description = "Code exchanged", body = DropboxCallbackDto),
        (status = 400, description = "CSRF validation failed", body = ErrorDto),
        (status = 502, description = "Dropbox rejected the code", body = ErrorDto)
    ),
)]
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    CsrfSession::new(&session).validate(&params.state).await?;

    let tokens = state.dropbox.exchange_code(params.code).await?;

    tracing::info!("Dropbox authorization completed");

    Ok((
        StatusCode::OK,
        Json(DropboxCallbackDto {
            message: "Dropbox authorized. Set DROPBOX_REFRESH_TOKEN to the refresh token below."
                .to_string(),
            refresh_token: tokens.refresh_token,
        }),
    ))
}

/// Check the configured refresh token by exchanging it for an access token.
#[utoipa::path(
    post,
    path = "/api/dropbox/refresh-token",
    tag = DROPBOX_TAG,
    responses(
        (status = 200, description = "Refresh token is valid", body = DropboxRefreshDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 502, description = "Dropbox rejected the refresh token", body = ErrorDto),
        (status = 503, description = "Dropbox not configured", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn refresh_token(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let tokens = state.dropbox.refresh().await?;

    Ok((
        StatusCode::OK,
        Json(DropboxRefreshDto {
            success: true,
            expires_in: tokens.expires_in.map(|ttl| ttl.as_secs()),
        }),
    ))
}
