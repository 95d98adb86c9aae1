use std::sync::Arc;

use axum::{routing::get, Router};
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor, GovernorLayer,
};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        activity_log::{self, ACTIVITY_LOG_TAG},
        auth::{self, AUTH_TAG},
        backup::{self, BACKUP_TAG},
        calendar::{self, CALENDAR_TAG},
        category::{self, CATEGORY_TAG},
        chat::{self, CHAT_TAG},
        comment::{self, COMMENT_TAG},
        dropbox::{self, DROPBOX_TAG},
        file::{self, FILE_TAG},
        health::{self, HEALTH_TAG},
        news::{self, NEWS_TAG},
        notification::{self, NOTIFICATION_TAG},
        post::{self, POST_TAG},
        presence::{self, PRESENCE_TAG},
        telegram::{self, TELEGRAM_TAG},
        user::{self, USER_TAG},
        video_call::{self, VIDEO_CALL_TAG},
    },
    error::AppError,
    realtime::socket::ws_handler,
    state::AppState,
};

/// Login attempts: one token every 12 seconds per client, bursts of 5.
const LOGIN_REPLENISH_SECONDS: u64 = 12;
const LOGIN_BURST: u32 = 5;

#[derive(OpenApi)]
#[openapi(
    info(title = "Yskandar API", description = "Community platform backend"),
    modifiers(&SecurityAddon),
    tags(
        (name = HEALTH_TAG, description = "Service health"),
        (name = AUTH_TAG, description = "Login and own account"),
        (name = USER_TAG, description = "User administration"),
        (name = PRESENCE_TAG, description = "Online users"),
        (name = CATEGORY_TAG, description = "Post categories"),
        (name = POST_TAG, description = "Posts"),
        (name = COMMENT_TAG, description = "Threaded comments"),
        (name = CHAT_TAG, description = "Community chat"),
        (name = FILE_TAG, description = "Shared files and links"),
        (name = NEWS_TAG, description = "News links"),
        (name = NOTIFICATION_TAG, description = "Email notifications"),
        (name = TELEGRAM_TAG, description = "Telegram notifications"),
        (name = ACTIVITY_LOG_TAG, description = "Security audit log"),
        (name = CALENDAR_TAG, description = "Scheduling polls"),
        (name = VIDEO_CALL_TAG, description = "Video calls and meeting rooms"),
        (name = BACKUP_TAG, description = "Database backups"),
        (name = DROPBOX_TAG, description = "Dropbox authorization"),
    )
)]
struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi
            .components
            .get_or_insert_with(Default::default)
            .add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
    }
}

/// Login attempts are keyed on the socket peer address, never on forwarded headers.
const LOGIN_KEY_EXTRACTOR: PeerIpKeyExtractor = PeerIpKeyExtractor;

/// Builds every API route plus the websocket endpoint and the Swagger UI.
///
/// # Returns
/// - `Ok(Router)` - Router awaiting its `AppState`
/// - `Err(AppError::InternalError)` - The login rate limit could not be configured
pub fn router() -> Result<Router<AppState>, AppError> {
    let governor = GovernorConfigBuilder::default()
        .per_second(LOGIN_REPLENISH_SECONDS)
        .burst_size(LOGIN_BURST)
        .key_extractor(LOGIN_KEY_EXTRACTOR)
        .finish()
        .ok_or_else(|| AppError::InternalError("Invalid login rate limit".to_string()))?;

    let login = OpenApiRouter::new()
        .routes(routes!(auth::login))
        .layer(GovernorLayer::new(Arc::new(governor)));

    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(health::root))
        .routes(routes!(health::health))
        .merge(login)
        .routes(routes!(auth::logout))
        .routes(routes!(auth::get_me, auth::update_me))
        .routes(routes!(auth::change_password))
        .routes(routes!(user::create_user, user::get_users))
        .routes(routes!(user::get_user, user::update_user, user::delete_user))
        .routes(routes!(user::toggle_user_status))
        .routes(routes!(presence::get_online_users))
        .routes(routes!(category::get_categories, category::create_category))
        .routes(routes!(category::get_all_categories))
        .routes(routes!(category::initialize_categories))
        .routes(routes!(
            category::get_category_by_id,
            category::update_category,
            category::delete_category
        ))
        .routes(routes!(post::get_posts, post::create_post))
        .routes(routes!(post::get_post, post::update_post, post::delete_post))
        .routes(routes!(comment::get_post_comments, comment::create_comment))
        .routes(routes!(comment::get_post_comment_tree))
        .routes(routes!(comment::delete_comment))
        .routes(routes!(chat::get_messages, chat::send_message))
        .routes(routes!(file::get_files))
        .routes(routes!(file::get_file, file::delete_file))
        .routes(routes!(file::upload_file))
        .routes(routes!(file::create_link))
        .routes(routes!(news::get_news, news::create_news))
        .routes(routes!(
            news::get_news_by_id,
            news::update_news,
            news::delete_news
        ))
        .routes(routes!(notification::broadcast_email))
        .routes(routes!(notification::get_recipients))
        .routes(routes!(
            notification::get_preferences,
            notification::update_preferences
        ))
        .routes(routes!(notification::update_user_preferences))
        .routes(routes!(notification::bulk_update_preferences))
        .routes(routes!(notification::get_all_preferences))
        .routes(routes!(telegram::get_bot_info))
        .routes(routes!(telegram::configure))
        .routes(routes!(telegram::get_config))
        .routes(routes!(telegram::send_test))
        .routes(routes!(telegram::broadcast))
        .routes(routes!(telegram::get_stats))
        .routes(routes!(activity_log::get_logs))
        .routes(routes!(activity_log::get_stats))
        .routes(routes!(activity_log::get_user_logs))
        .routes(routes!(activity_log::cleanup_logs))
        .routes(routes!(activity_log::bulk_delete_logs))
        .routes(routes!(calendar::create_doodle, calendar::get_doodles))
        .routes(routes!(calendar::get_doodle, calendar::delete_doodle))
        .routes(routes!(calendar::respond_doodle))
        .routes(routes!(calendar::close_doodle))
        .routes(routes!(video_call::create_call))
        .routes(routes!(video_call::get_my_calls))
        .routes(routes!(video_call::join_call))
        .routes(routes!(video_call::leave_call))
        .routes(routes!(video_call::get_meeting_rooms))
        .routes(routes!(video_call::create_meeting_room))
        .routes(routes!(video_call::get_call_history))
        .routes(routes!(video_call::delete_meeting_room))
        .routes(routes!(video_call::generate_token))
        .routes(routes!(video_call::health))
        .routes(routes!(backup::create_backup))
        .routes(routes!(backup::list_backups))
        .routes(routes!(backup::get_status))
        .routes(routes!(backup::cleanup_backups))
        .routes(routes!(backup::download_backup))
        .routes(routes!(backup::get_scheduler_status))
        .routes(routes!(backup::start_scheduler))
        .routes(routes!(backup::stop_scheduler))
        .routes(routes!(dropbox::authorize))
        .routes(routes!(dropbox::callback))
        .routes(routes!(dropbox::refresh_token))
        .split_for_parts();

    Ok(router
        .route("/api/ws", get(ws_handler))
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", api)))
}
