use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        user::{CreateUserDto, UpdateUserDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::user::{Role, UpdateUserParams},
        service::user::UserService,
        state::AppState,
        util::parse::parse_id,
    },
};

/// Tag for grouping user management endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Create a user account.
///
/// # Access Control
/// - `Admin` - Only admins can create accounts
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - Email, name, password, role and optional phone
///
/// # Returns
/// - `201 Created` - The created user
/// - `400 Bad Request` - Invalid field, "Email already registered" or "Name already taken"
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin
#[utoipa::path(
    post,
    path = "/api/auth/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created", body = UserDto),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let user = UserService::new(&state.db)
        .create(
            &payload.email,
            &payload.name,
            &payload.password,
            Role::from(payload.role),
            payload.phone,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// List every user account, active or not.
///
/// # Access Control
/// - `Admin` - Only admins can list accounts
///
/// # Returns
/// - `200 OK` - All users
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin
#[utoipa::path(
    get,
    path = "/api/auth/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users", body = Vec<UserDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_users(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let users = UserService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(users.into_iter().map(|u| u.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Get a single user by ID.
#[utoipa::path(
    get,
    path = "/api/auth/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "The user", body = UserDto),
        (status = 400, description = "Invalid user ID format", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let user = UserService::new(&state.db)
        .get(parse_id(&id, "user")?)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Partially update a user, including role and active flag.
#[utoipa::path(
    put,
    path = "/api/auth/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "User updated", body = UserDto),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let user = UserService::new(&state.db)
        .update(parse_id(&id, "user")?, UpdateUserParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Delete a user account.
///
/// Admins cannot delete their own account.
///
/// # Access Control
/// - `Admin` - Only admins can delete accounts
///
/// # Returns
/// - `204 No Content` - User deleted
/// - `400 Bad Request` - Invalid ID or the caller targeted themselves
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - No such user
#[utoipa::path(
    delete,
    path = "/api/auth/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, description = "Cannot delete your own account", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    UserService::new(&state.db)
        .delete(&admin, parse_id(&id, "user")?)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Flip a user's active flag. Deactivated users are rejected on their next request.
#[utoipa::path(
    post,
    path = "/api/auth/users/{id}/toggle-status",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Status toggled", body = UserDto),
        (status = 400, description = "Cannot change your own status", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn toggle_user_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let user = UserService::new(&state.db)
        .toggle_status(&admin, parse_id(&id, "user")?)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
