//! Backup artifacts and scheduler status.

use chrono::{DateTime, Utc};

use crate::{
    model::backup::{BackupFileDto, BackupResultDto, SchedulerStatusDto},
    server::integration::dropbox::DropboxEntry,
};

pub const BACKUP_FOLDER: &str = "/yskandar_backups";
pub const BACKUP_PREFIX: &str = "yskandar_backup_";
pub const BACKUP_EXTENSION: &str = ".db";

/// Number of backups kept after retention runs.
pub const BACKUPS_TO_KEEP: usize = 4;

/// `yskandar_backup_YYYYmmdd_HHMMSS.db` for the given instant.
pub fn backup_filename(at: DateTime<Utc>) -> String {
    format!(
        "{}{}{}",
        BACKUP_PREFIX,
        at.format("%Y%m%d_%H%M%S"),
        BACKUP_EXTENSION
    )
}

#[derive(Debug, Clone, PartialEq)]
pub struct BackupFile {
    pub name: String,
    pub path: String,
    pub size: u64,
    pub modified: Option<String>,
}

impl BackupFile {
    /// Keeps only files that follow the backup naming scheme.
    pub fn from_entry(entry: DropboxEntry) -> Option<Self> {
        if !entry.is_file()
            || !entry.name.starts_with(BACKUP_PREFIX)
            || !entry.name.ends_with(BACKUP_EXTENSION)
        {
            return None;
        }

        Some(Self {
            path: entry
                .path_display
                .unwrap_or_else(|| format!("{}/{}", BACKUP_FOLDER, entry.name)),
            name: entry.name,
            size: entry.size.unwrap_or(0),
            modified: entry.server_modified,
        })
    }

    pub fn into_dto(self) -> BackupFileDto {
        BackupFileDto {
            name: self.name,
            path: self.path,
            size: self.size,
            modified: self.modified,
        }
    }
}

/// Sorts backups newest first; timestamped names sort chronologically.
pub fn sort_newest_first(backups: &mut [BackupFile]) {
    backups.sort_by(|a, b| b.name.cmp(&a.name));
}

/// Splits the backups to delete from the `keep` newest ones.
pub fn expired_backups(mut backups: Vec<BackupFile>, keep: usize) -> Vec<BackupFile> {
    sort_newest_first(&mut backups);
    if backups.len() <= keep {
        return Vec::new();
    }
    backups.split_off(keep)
}

/// Outcome of a backup run.
#[derive(Debug, Clone, PartialEq)]
pub struct BackupOutcome {
    pub filename: String,
    pub size_bytes: u64,
    pub timestamp: DateTime<Utc>,
    pub dropbox_path: String,
}

impl BackupOutcome {
    pub fn into_dto(self) -> BackupResultDto {
        BackupResultDto {
            success: true,
            filename: self.filename,
            size_bytes: self.size_bytes,
            timestamp: self.timestamp,
            dropbox_path: self.dropbox_path,
        }
    }
}

/// Snapshot of the backup scheduler.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchedulerStatus {
    pub enabled: bool,
    pub running: bool,
    pub interval_hours: u32,
    pub last_run: Option<DateTime<Utc>>,
    pub last_success: Option<bool>,
    pub last_error: Option<String>,
    pub next_backup_estimate: Option<DateTime<Utc>>,
}

impl SchedulerStatus {
    pub fn into_dto(self) -> SchedulerStatusDto {
        SchedulerStatusDto {
            enabled: self.enabled,
            running: self.running,
            interval_hours: self.interval_hours,
            last_run: self.last_run,
            last_success: self.last_success,
            last_error: self.last_error,
            next_backup_estimate: self.next_backup_estimate,
        }
    }
}
