use std::str::FromStr;

use crate::server::error::{config::ConfigError, AppError};

const DROPBOX_AUTH_URL: &str = "https://www.dropbox.com/oauth2/authorize";
const DROPBOX_TOKEN_URL: &str = "https://api.dropboxapi.com/oauth2/token";

/// SMTP credentials. Absent when `MAIL_USERNAME`/`MAIL_PASSWORD` are unset.
#[derive(Clone)]
pub struct MailConfig {
    pub username: String,
    pub password: String,
    pub from: String,
    pub from_name: String,
    pub server: String,
    pub port: u16,
    pub starttls: bool,
}

#[derive(Clone)]
pub struct CloudinaryConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
}

#[derive(Clone)]
pub struct DropboxConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_url: String,
    pub refresh_token: Option<String>,

    pub auth_url: String,
    pub token_url: String,
}

/// Bootstrap credentials for the first administrator.
#[derive(Clone)]
pub struct DefaultAdminConfig {
    pub email: String,
    pub name: String,
    pub password: String,
}

pub struct Config {
    pub database_url: String,
    pub session_database_url: String,
    pub bind_address: String,
    pub jwt_secret: String,

    pub app_url: String,
    pub cors_origins: Vec<String>,

    pub default_admin: Option<DefaultAdminConfig>,
    pub mail: Option<MailConfig>,
    pub telegram_bot_token: Option<String>,
    pub cloudinary: Option<CloudinaryConfig>,
    pub dropbox: Option<DropboxConfig>,

    pub backup_interval_hours: u32,
    pub scheduled_backups_enabled: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = required("DATABASE_URL")?;

        Ok(Self {
            session_database_url: optional("SESSION_DB_URL")
                .unwrap_or_else(|| database_url.clone()),
            database_url,
            bind_address: optional("BIND_ADDRESS").unwrap_or_else(|| "0.0.0.0:8000".to_string()),
            jwt_secret: required("JWT_SECRET")?,
            app_url: optional("FRONTEND_URL").unwrap_or_else(|| "https://yskandar.com".to_string()),
            cors_origins: optional("CORS_ORIGINS")
                .unwrap_or_else(|| "http://localhost:5173".to_string())
                .split(',')
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .collect(),
            default_admin: match optional("ADMIN_PASSWORD") {
                Some(password) => Some(DefaultAdminConfig {
                    email: optional("ADMIN_EMAIL")
                        .unwrap_or_else(|| "admin@yskandar.com".to_string()),
                    name: optional("ADMIN_NAME").unwrap_or_else(|| "admin".to_string()),
                    password,
                }),
                None => None,
            },
            mail: match (optional("MAIL_USERNAME"), optional("MAIL_PASSWORD")) {
                (Some(username), Some(password)) => Some(MailConfig {
                    from: optional("MAIL_FROM").unwrap_or_else(|| username.clone()),
                    from_name: optional("MAIL_FROM_NAME").unwrap_or_else(|| "Yskandar".to_string()),
                    server: optional("MAIL_SERVER").unwrap_or_else(|| "smtp.gmail.com".to_string()),
                    port: parse_or("MAIL_PORT", 587)?,
                    starttls: parse_or("MAIL_STARTTLS", true)?,
                    username,
                    password,
                }),
                _ => None,
            },
            telegram_bot_token: optional("TELEGRAM_BOT_TOKEN"),
            cloudinary: match (
                optional("CLOUDINARY_CLOUD_NAME"),
                optional("CLOUDINARY_API_KEY"),
                optional("CLOUDINARY_API_SECRET"),
            ) {
                (Some(cloud_name), Some(api_key), Some(api_secret)) => Some(CloudinaryConfig {
                    cloud_name,
                    api_key,
                    api_secret,
                }),
                _ => None,
            },
            dropbox: match (
                optional("DROPBOX_CLIENT_ID"),
                optional("DROPBOX_CLIENT_SECRET"),
            ) {
                (Some(client_id), Some(client_secret)) => Some(DropboxConfig {
                    client_id,
                    client_secret,
                    redirect_url: optional("DROPBOX_REDIRECT_URI").unwrap_or_else(|| {
                        "http://localhost:8000/api/dropbox/callback".to_string()
                    }),
                    refresh_token: optional("DROPBOX_REFRESH_TOKEN"),
                    auth_url: DROPBOX_AUTH_URL.to_string(),
                    token_url: DROPBOX_TOKEN_URL.to_string(),
                }),
                _ => None,
            },
            backup_interval_hours: parse_or("BACKUP_INTERVAL_HOURS", 168)?,
            scheduled_backups_enabled: parse_or("ENABLE_SCHEDULED_BACKUPS", true)?,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    optional(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

/// Reads a variable, treating empty values as unset.
fn optional(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_or<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match optional(name) {
        Some(value) => value
            .to_lowercase()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value,
            }),
        None => Ok(default),
    }
}
