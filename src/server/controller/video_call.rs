use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        video_call::{
            CallHistoryEntryDto, CallTokenDto, CreateCallDto, CreateMeetingRoomDto,
            GenerateTokenDto, JoinCallDto, VideoCallDto, VideoHealthDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::video_call::CallType,
        service::video_call::{MeetingRoom, VideoCallService},
        state::AppState,
        util::parse::parse_id,
    },
};

pub static VIDEO_CALL_TAG: &str = "video-call";

/// Start a call.
///
/// The creator is never listed among the invitees. Private calls can only be joined by the
/// creator and invitees.
///
/// # Access Control
/// - Authenticated users
///
/// # Returns
/// - `201 Created` - The waiting call with its channel name
/// - `400 Bad Request` - Participant limit out of range
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    post,
    path = "/api/video-calls/create-call",
    tag = VIDEO_CALL_TAG,
    request_body = CreateCallDto,
    responses(
        (status = 201, description = "Call created", body = VideoCallDto),
        (status = 400, description = "Invalid call data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_call(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateCallDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let call = VideoCallService::new(&state.db)
        .create_call(
            &user,
            CallType::from(payload.call_type),
            payload.invited_users,
            payload.max_participants,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(call.into_dto())))
}

/// Calls the caller created, was invited to or joined.
#[utoipa::path(
    get,
    path = "/api/video-calls/my-calls",
    tag = VIDEO_CALL_TAG,
    responses(
        (status = 200, description = "Calls, newest first", body = Vec<VideoCallDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_my_calls(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let calls = VideoCallService::new(&state.db).my_calls(&user).await?;

    Ok((
        StatusCode::OK,
        Json(calls.into_iter().map(|c| c.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Join a call or meeting room.
///
/// Joining twice is harmless. The first participant activates the call.
///
/// # Access Control
/// - Authenticated users; private calls require creator or invitee, protected rooms require
///   the password unless the caller created the room
///
/// # Returns
/// - `200 OK` - The call with the caller among its participants
/// - `400 Bad Request` - Call ended or full
/// - `403 Forbidden` - Not invited, or wrong room password
/// - `404 Not Found` - No such call
#[utoipa::path(
    post,
    path = "/api/video-calls/join-call/{id}",
    tag = VIDEO_CALL_TAG,
    params(("id" = i32, Path, description = "Call ID")),
    request_body = JoinCallDto,
    responses(
        (status = 200, description = "Joined the call", body = VideoCallDto),
        (status = 400, description = "Call ended or full", body = ErrorDto),
        (status = 403, description = "Not allowed to join", body = ErrorDto),
        (status = 404, description = "Call not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn join_call(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    payload: Option<Json<JoinCallDto>>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let password = payload.and_then(|Json(dto)| dto.password);

    let call = VideoCallService::new(&state.db)
        .join(&user, parse_id(&id, "call")?, password.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(call.into_dto())))
}

/// Leave a call. The call ends once its last participant leaves.
#[utoipa::path(
    post,
    path = "/api/video-calls/leave-call/{id}",
    tag = VIDEO_CALL_TAG,
    params(("id" = i32, Path, description = "Call ID")),
    responses(
        (status = 200, description = "Left the call", body = VideoCallDto),
        (status = 400, description = "Not a participant", body = ErrorDto),
        (status = 404, description = "Call not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn leave_call(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let call = VideoCallService::new(&state.db)
        .leave(&user, parse_id(&id, "call")?)
        .await?;

    Ok((StatusCode::OK, Json(call.into_dto())))
}

/// Open meeting rooms that are public or owned by the caller.
#[utoipa::path(
    get,
    path = "/api/video-calls/meeting-rooms",
    tag = VIDEO_CALL_TAG,
    responses(
        (status = 200, description = "Open meeting rooms", body = Vec<VideoCallDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_meeting_rooms(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let rooms = VideoCallService::new(&state.db)
        .meeting_rooms(&user)
        .await?;

    Ok((
        StatusCode::OK,
        Json(rooms.into_iter().map(|r| r.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Open a persistent meeting room.
///
/// # Access Control
/// - Authenticated users
///
/// # Returns
/// - `201 Created` - The room
/// - `400 Bad Request` - Name shorter than 3 characters or participant limit outside 2..=100
#[utoipa::path(
    post,
    path = "/api/video-calls/create-meeting-room",
    tag = VIDEO_CALL_TAG,
    request_body = CreateMeetingRoomDto,
    responses(
        (status = 201, description = "Meeting room created", body = VideoCallDto),
        (status = 400, description = "Invalid room data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_meeting_room(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateMeetingRoomDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let room = VideoCallService::new(&state.db)
        .create_meeting_room(
            &user,
            MeetingRoom {
                room_name: payload.room_name,
                description: payload.description,
                max_participants: payload.max_participants,
                is_public: payload.is_public,
                password: payload.password,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(room.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/video-calls/call-history",
    tag = VIDEO_CALL_TAG,
    responses(
        (status = 200, description = "Ended calls with their duration", body = Vec<CallHistoryEntryDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_call_history(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let calls = VideoCallService::new(&state.db)
        .call_history(&user)
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            calls
                .into_iter()
                .map(|c| c.into_history_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Delete an empty meeting room. Creator only.
#[utoipa::path(
    delete,
    path = "/api/video-calls/delete-meeting-room/{id}",
    tag = VIDEO_CALL_TAG,
    params(("id" = i32, Path, description = "Meeting room ID")),
    responses(
        (status = 204, description = "Meeting room deleted"),
        (status = 400, description = "Not a meeting room, or participants still inside", body = ErrorDto),
        (status = 403, description = "Not the creator", body = ErrorDto),
        (status = 404, description = "Call not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_meeting_room(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    VideoCallService::new(&state.db)
        .delete_meeting_room(&user, parse_id(&id, "call")?)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Channel credentials for the media client. The token itself is always null.
#[utoipa::path(
    post,
    path = "/api/video-calls/generate-token",
    tag = VIDEO_CALL_TAG,
    request_body = GenerateTokenDto,
    responses(
        (status = 200, description = "Channel credentials", body = CallTokenDto),
        (status = 400, description = "Invalid channel name", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn generate_token(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<GenerateTokenDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let token = VideoCallService::new(&state.db).generate_token(
        &user,
        &payload.channel_name,
        payload.uid,
    )?;

    Ok((
        StatusCode::OK,
        Json(CallTokenDto {
            token: token.token,
            channel: token.channel,
            uid: token.uid,
            app_id: token.app_id,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/video-calls/health",
    tag = VIDEO_CALL_TAG,
    responses(
        (status = 200, description = "Video call service status", body = VideoHealthDto)
    ),
)]
pub async fn health(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let active_calls = VideoCallService::new(&state.db).active_calls().await?;

    Ok((
        StatusCode::OK,
        Json(VideoHealthDto {
            status: "healthy".to_string(),
            service: "video-calls".to_string(),
            active_calls,
        }),
    ))
}
