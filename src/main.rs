mod model;
mod server;

use std::net::SocketAddr;

use axum::http::HeaderValue;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    integration::{
        cloudinary::CloudinaryClient, dropbox::DropboxClient, mailer::Mailer,
        telegram::TelegramClient,
    },
    realtime::hub::Hub,
    scheduler::{backup::BackupScheduler, presence},
    service::{notification::dispatcher::Notifier, token::TokenService},
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&config).await?;
    let http_client = startup::setup_reqwest_client()?;

    startup::ensure_default_admin(&db, &config).await?;

    let mailer = Mailer::new(config.mail.as_ref())?;
    let telegram = TelegramClient::new(http_client.clone(), config.telegram_bot_token.clone());
    let storage = CloudinaryClient::new(http_client.clone(), config.cloudinary.clone());
    let dropbox = DropboxClient::new(http_client, config.dropbox.as_ref())?;

    if !mailer.is_enabled() {
        tracing::warn!("MAIL_USERNAME/MAIL_PASSWORD not set, email notifications disabled");
    }
    if !telegram.is_enabled() {
        tracing::warn!("TELEGRAM_BOT_TOKEN not set, Telegram notifications disabled");
    }
    if !storage.is_enabled() {
        tracing::warn!("Cloudinary credentials not set, file uploads disabled");
    }
    if !dropbox.is_configured() {
        tracing::warn!("Dropbox not fully configured, backups disabled");
    }

    let notifier = Notifier::new(db.clone(), mailer, telegram, config.app_url.clone());

    // Start presence cleanup scheduler
    let presence_db = db.clone();
    tokio::spawn(async move {
        if let Err(e) = presence::start_scheduler(presence_db).await {
            tracing::error!("Presence cleanup scheduler error: {}", e);
        }
    });

    let backup_scheduler = BackupScheduler::new(
        db.clone(),
        dropbox.clone(),
        config.backup_interval_hours,
        config.scheduled_backups_enabled,
    );
    if backup_scheduler.is_enabled() {
        if let Err(e) = backup_scheduler.start().await {
            tracing::error!("Failed to start backup scheduler: {}", e);
        }
    }

    let state = AppState {
        db,
        tokens: TokenService::new(&config.jwt_secret),
        notifier,
        storage,
        dropbox,
        hub: Hub::new(),
        backup_scheduler,
    };

    let app = server::router::router()?
        .with_state(state)
        .layer(session)
        .layer(cors_layer(&config.cors_origins)?)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;

    tracing::info!("Starting server on {}", config.bind_address);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

fn cors_layer(origins: &[String]) -> Result<CorsLayer, AppError> {
    let origins = origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .map_err(|_| ConfigError::InvalidEnvVar {
                    name: "CORS_ORIGINS".to_string(),
                    value: origin.clone(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any))
}
