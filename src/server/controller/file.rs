use axum::{
    extract::{multipart::Field, Multipart, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        file::{CreateLinkDto, FileDto, UploadFileForm},
    },
    server::{
        controller::post::CategoryFilter,
        error::AppError,
        middleware::auth::AuthGuard,
        service::file::{FileService, Link, Upload},
        state::AppState,
        util::parse::parse_id,
    },
};

pub static FILE_TAG: &str = "file";

/// Get shared files and links newest first.
#[utoipa::path(
    get,
    path = "/api/files",
    tag = FILE_TAG,
    params(CategoryFilter),
    responses(
        (status = 200, description = "Files, newest first", body = Vec<FileDto>)
    ),
)]
pub async fn get_files(
    State(state): State<AppState>,
    Query(filter): Query<CategoryFilter>,
) -> Result<impl IntoResponse, AppError> {
    let files = FileService::new(&state.db, &state.storage)
        .get_all(filter.category_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(files.into_iter().map(|f| f.into_dto()).collect::<Vec<_>>()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/files/{id}",
    tag = FILE_TAG,
    params(("id" = i32, Path, description = "File ID")),
    responses(
        (status = 200, description = "The file record", body = FileDto),
        (status = 400, description = "Invalid file ID format", body = ErrorDto),
        (status = 404, description = "File not found", body = ErrorDto)
    ),
)]
pub async fn get_file(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let file = FileService::new(&state.db, &state.storage)
        .get(parse_id(&id, "file")?)
        .await?;

    Ok((StatusCode::OK, Json(file.into_dto())))
}

/// Upload a file to cloud storage.
///
/// Reads the multipart fields `file`, `description` and `category_id`, then proxies the bytes
/// to the storage provider. Images are stored as image resources, everything else as raw.
///
/// # Access Control
/// - Authenticated users
///
/// # Returns
/// - `201 Created` - Stored record with the public URL
/// - `400 Bad Request` - Missing or empty file, or malformed form
/// - `502 Bad Gateway` - Storage rejected the upload
/// - `503 Service Unavailable` - Storage is not configured
#[utoipa::path(
    post,
    path = "/api/files/upload",
    tag = FILE_TAG,
    request_body(content = UploadFileForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "File uploaded", body = FileDto),
        (status = 400, description = "Invalid upload", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 502, description = "Storage upload failed", body = ErrorDto),
        (status = 503, description = "Storage not configured", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn upload_file(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let mut file: Option<(Vec<u8>, String, String)> = None;
    let mut description = None;
    let mut category_id = None;

    while let Some(field) = multipart.next_field().await.map_err(bad_form)? {
        match field.name() {
            Some("file") => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field.bytes().await.map_err(bad_form)?;
                file = Some((bytes.to_vec(), filename, content_type));
            }
            Some("description") => {
                description = Some(text(field).await?).filter(|d| !d.trim().is_empty());
            }
            Some("category_id") => {
                let raw = text(field).await?;
                if !raw.trim().is_empty() {
                    category_id = Some(parse_id(&raw, "category")?);
                }
            }
            _ => {}
        }
    }

    let Some((bytes, filename, content_type)) = file else {
        return Err(AppError::BadRequest("No file provided".to_string()));
    };

    let record = FileService::new(&state.db, &state.storage)
        .upload(
            &user,
            Upload {
                bytes,
                filename,
                content_type,
                description,
                category_id,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(record.into_dto())))
}

/// Share a link instead of uploading a file.
#[utoipa::path(
    post,
    path = "/api/files/link",
    tag = FILE_TAG,
    request_body = CreateLinkDto,
    responses(
        (status = 201, description = "Link stored", body = FileDto),
        (status = 400, description = "Invalid URL or title", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_link(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateLinkDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let record = FileService::new(&state.db, &state.storage)
        .create_link(
            &user,
            Link {
                url: payload.url,
                title: payload.title,
                description: payload.description,
                category_id: payload.category_id,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(record.into_dto())))
}

/// Delete a file record, removing the stored asset first for uploads.
///
/// # Access Control
/// - Uploader or `Admin`
///
/// # Returns
/// - `204 No Content` - File deleted
/// - `403 Forbidden` - Caller is neither the uploader nor an admin
/// - `404 Not Found` - No such file
#[utoipa::path(
    delete,
    path = "/api/files/{id}",
    tag = FILE_TAG,
    params(("id" = i32, Path, description = "File ID")),
    responses(
        (status = 204, description = "File deleted"),
        (status = 403, description = "Not the uploader", body = ErrorDto),
        (status = 404, description = "File not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_file(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    FileService::new(&state.db, &state.storage)
        .delete(&user, parse_id(&id, "file")?)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

async fn text(field: Field<'_>) -> Result<String, AppError> {
    field.text().await.map_err(bad_form)
}

fn bad_form(err: axum::extract::multipart::MultipartError) -> AppError {
    AppError::BadRequest(format!("Invalid multipart form: {}", err.body_text()))
}
