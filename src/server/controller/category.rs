use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        category::{CategoryDto, CreateCategoryDto, InitializeCategoriesDto, UpdateCategoryDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::category::{CreateCategoryParams, UpdateCategoryParams},
        service::category::CategoryService,
        state::AppState,
        util::parse::parse_id,
    },
};

/// Tag for grouping category endpoints in OpenAPI documentation
pub static CATEGORY_TAG: &str = "category";

/// Get active categories sorted by name.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - Active categories
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/categories",
    tag = CATEGORY_TAG,
    responses(
        (status = 200, description = "Active categories", body = Vec<CategoryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_categories(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let categories = CategoryService::new(&state.db).get_all(true).await?;

    Ok((
        StatusCode::OK,
        Json(
            categories
                .into_iter()
                .map(|c| c.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Get every category including inactive ones.
///
/// # Access Control
/// - `Admin` - Only admins see inactive categories
///
/// # Returns
/// - `200 OK` - All categories
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin
#[utoipa::path(
    get,
    path = "/api/categories/all",
    tag = CATEGORY_TAG,
    responses(
        (status = 200, description = "All categories", body = Vec<CategoryDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_all_categories(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let categories = CategoryService::new(&state.db).get_all(false).await?;

    Ok((
        StatusCode::OK,
        Json(
            categories
                .into_iter()
                .map(|c| c.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Get a specific category by ID.
///
/// # Returns
/// - `200 OK` - The category
/// - `400 Bad Request` - Malformed ID
/// - `404 Not Found` - No such category
#[utoipa::path(
    get,
    path = "/api/categories/{id}",
    tag = CATEGORY_TAG,
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "The category", body = CategoryDto),
        (status = 400, description = "Invalid category ID format", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto)
    ),
)]
pub async fn get_category_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let category = CategoryService::new(&state.db)
        .get(parse_id(&id, "category")?)
        .await?;

    Ok((StatusCode::OK, Json(category.into_dto())))
}

/// Create a new category.
///
/// Names are unique regardless of case.
///
/// # Access Control
/// - `Admin` - Only admins can create categories
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - Name, optional description and active flag
///
/// # Returns
/// - `201 Created` - The created category
/// - `400 Bad Request` - Invalid data or "Category name already exists"
/// - `403 Forbidden` - Caller is not an admin
#[utoipa::path(
    post,
    path = "/api/categories",
    tag = CATEGORY_TAG,
    request_body = CreateCategoryDto,
    responses(
        (status = 201, description = "Category created", body = CategoryDto),
        (status = 400, description = "Invalid category data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_category(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let category = CategoryService::new(&state.db)
        .create(CreateCategoryParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(category.into_dto())))
}

/// Update an existing category.
///
/// All fields are optional; the duplicate-name check ignores the category itself.
///
/// # Access Control
/// - `Admin` - Only admins can update categories
///
/// # Returns
/// - `200 OK` - Updated category
/// - `400 Bad Request` - Invalid data or name already taken
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - No such category
#[utoipa::path(
    put,
    path = "/api/categories/{id}",
    tag = CATEGORY_TAG,
    params(("id" = i32, Path, description = "Category ID")),
    request_body = UpdateCategoryDto,
    responses(
        (status = 200, description = "Category updated", body = CategoryDto),
        (status = 400, description = "Invalid category data", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_category(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(payload): Json<UpdateCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let category = CategoryService::new(&state.db)
        .update(
            parse_id(&id, "category")?,
            UpdateCategoryParams::from_dto(payload),
        )
        .await?;

    Ok((StatusCode::OK, Json(category.into_dto())))
}

/// Delete a category.
///
/// Refused while any post still references the category.
///
/// # Access Control
/// - `Admin` - Only admins can delete categories
///
/// # Returns
/// - `204 No Content` - Category deleted
/// - `400 Bad Request` - Posts still use the category
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - No such category
#[utoipa::path(
    delete,
    path = "/api/categories/{id}",
    tag = CATEGORY_TAG,
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 204, description = "Category deleted"),
        (status = 400, description = "Category is in use", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_category(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    CategoryService::new(&state.db)
        .delete(parse_id(&id, "category")?)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Seed the default categories. Existing names are skipped.
#[utoipa::path(
    post,
    path = "/api/categories/initialize",
    tag = CATEGORY_TAG,
    responses(
        (status = 200, description = "Default categories created", body = InitializeCategoriesDto),
        (status = 403, description = "User is not an admin", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn initialize_categories(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let created = CategoryService::new(&state.db)
        .initialize_defaults()
        .await?;

    Ok((
        StatusCode::OK,
        Json(InitializeCategoriesDto {
            message: format!("Created {} default categories", created.len()),
            created: created.into_iter().map(|c| c.into_dto()).collect(),
        }),
    ))
}
