use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BackupResultDto {
    pub success: bool,
    pub filename: String,
    pub size_bytes: u64,
    pub timestamp: DateTime<Utc>,
    pub dropbox_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BackupFileDto {
    pub name: String,
    pub path: String,
    pub size: u64,
    pub modified: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BackupListDto {
    pub backups: Vec<BackupFileDto>,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SchedulerStatusDto {
    pub enabled: bool,
    pub running: bool,
    pub interval_hours: u32,
    pub last_run: Option<DateTime<Utc>>,
    pub last_success: Option<bool>,
    pub last_error: Option<String>,
    pub next_backup_estimate: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BackupStatusDto {
    pub configured: bool,
    pub last_backup: Option<BackupFileDto>,
    pub backup_count: usize,
    pub scheduler: SchedulerStatusDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BackupCleanupDto {
    pub deleted: Vec<String>,
    pub kept: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DownloadLinkDto {
    pub filename: String,
    pub link: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DropboxAuthDto {
    pub authorization_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DropboxCallbackDto {
    pub message: String,
    pub refresh_token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DropboxRefreshDto {
    pub success: bool,
    pub expires_in: Option<u64>,
}
