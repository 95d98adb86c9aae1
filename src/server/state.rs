//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request handler
//! through Axum's state extraction. Every field is cheap to clone: the database connection
//! is a pool, the integration clients wrap a shared `reqwest::Client`, and the hub and
//! scheduler keep their data behind `Arc`s.

use sea_orm::DatabaseConnection;

use crate::server::{
    integration::{cloudinary::CloudinaryClient, dropbox::DropboxClient},
    realtime::hub::Hub,
    scheduler::backup::BackupScheduler,
    service::{notification::dispatcher::Notifier, token::TokenService},
};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Signs and verifies bearer tokens.
    pub tokens: TokenService,

    /// Fire-and-forget email and Telegram notifications.
    pub notifier: Notifier,

    /// File storage for uploads.
    pub storage: CloudinaryClient,

    /// Backup destination, also used for the OAuth authorization flow.
    pub dropbox: DropboxClient,

    /// Connected websocket clients and call rooms.
    pub hub: Hub,

    /// Runtime-controllable backup job.
    pub backup_scheduler: BackupScheduler,
}
