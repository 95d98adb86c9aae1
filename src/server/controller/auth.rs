use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        auth::{ChangePasswordDto, LoginDto, TokenDto},
        user::{UpdateProfileDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::user::UpdateUserParams,
        service::{auth::AuthService, user::UserService},
        state::AppState,
        util::request::RequestMeta,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Exchange name and password for a bearer token.
///
/// Verifies the credentials, records a `login` activity entry for both outcomes and, on
/// success, queues a Telegram login alert for users who opted in. The alert is delivered in
/// the background and never delays or fails the response.
///
/// # Access Control
/// - Public, rate limited per client address
///
/// # Arguments
/// - `state` - Application state containing the database connection and token service
/// - `meta` - Client address and user agent for the activity log
/// - `payload` - Login name and password
///
/// # Returns
/// - `200 OK` - Signed token and the authenticated user
/// - `401 Unauthorized` - Unknown name, wrong password or deactivated account
/// - `500 Internal Server Error` - Database or token signing error
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Successfully authenticated", body = TokenDto),
        (status = 401, description = "Incorrect name or password, or account deactivated", body = ErrorDto),
        (status = 429, description = "Too many login attempts"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    meta: RequestMeta,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.tokens);

    let (user, access_token) = service
        .login(&payload.name, &payload.password, &meta)
        .await?;

    state.notifier.login(user.clone());

    Ok((
        StatusCode::OK,
        Json(TokenDto {
            access_token,
            token_type: "bearer".to_string(),
            user: user.into_dto(),
        }),
    ))
}

/// Record a logout.
///
/// Tokens are stateless, so logging out only writes the `logout` activity entry; the client
/// is expected to drop its token.
///
/// # Access Control
/// - Authenticated users
///
/// # Returns
/// - `200 OK` - Logout recorded
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Successfully logged out", body = MessageDto),
        (status = 401, description = "User not authenticated", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
    meta: RequestMeta,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    AuthService::new(&state.db, &state.tokens)
        .logout(&user, &meta)
        .await;

    Ok((StatusCode::OK, Json(MessageDto::new("Successfully logged out"))))
}

/// Get the currently authenticated user.
///
/// # Access Control
/// - Authenticated users
///
/// # Returns
/// - `200 OK` - The caller's profile
/// - `401 Unauthorized` - Missing or invalid token, or the user was deactivated
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "User not authenticated", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Update the caller's own profile.
///
/// Only name, email, phone and avatar can be changed here; role and active flag are reserved
/// for the admin endpoints. Name and email uniqueness are checked again.
///
/// # Access Control
/// - Authenticated users
///
/// # Returns
/// - `200 OK` - Updated profile
/// - `400 Bad Request` - Invalid field, or name/email already in use
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    put,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Profile updated", body = UserDto),
        (status = 400, description = "Invalid profile data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_me(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let updated = UserService::new(&state.db)
        .update(user.id, UpdateUserParams::from_profile_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(updated.into_dto())))
}

/// Change the caller's password.
///
/// # Access Control
/// - Authenticated users
///
/// # Returns
/// - `200 OK` - Password changed
/// - `400 Bad Request` - Current password incorrect or new password too short
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    post,
    path = "/api/auth/change-password",
    tag = AUTH_TAG,
    request_body = ChangePasswordDto,
    responses(
        (status = 200, description = "Password changed", body = MessageDto),
        (status = 400, description = "Current password is incorrect", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn change_password(
    State(state): State<AppState>,
    headers: HeaderMap,
    meta: RequestMeta,
    Json(payload): Json<ChangePasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    AuthService::new(&state.db, &state.tokens)
        .change_password(
            &user,
            &payload.current_password,
            &payload.new_password,
            &meta,
        )
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Password changed successfully")),
    ))
}
