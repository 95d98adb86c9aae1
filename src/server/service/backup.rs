//! Database backups to Dropbox.
//!
//! A backup is a consistent SQLite snapshot taken with `VACUUM INTO`, uploaded to the
//! backup folder. After each upload only the newest `BACKUPS_TO_KEEP` files are retained.

use std::path::Path;

use chrono::Utc;
use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::server::{
    error::{integration::IntegrationError, AppError},
    integration::dropbox::DropboxClient,
    model::backup::{
        backup_filename, expired_backups, sort_newest_first, BackupFile, BackupOutcome,
        BACKUPS_TO_KEEP, BACKUP_EXTENSION, BACKUP_FOLDER, BACKUP_PREFIX,
    },
};

/// Result of a retention pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cleanup {
    pub deleted: Vec<String>,
    pub kept: usize,
}

pub struct BackupService<'a> {
    db: &'a DatabaseConnection,
    dropbox: &'a DropboxClient,
}

impl<'a> BackupService<'a> {
    pub fn new(db: &'a DatabaseConnection, dropbox: &'a DropboxClient) -> Self {
        Self { db, dropbox }
    }

    /// Snapshots the database, uploads it and applies retention.
    ///
    /// Retention failures are logged; the backup itself still counts as successful.
    ///
    /// # Returns
    /// - `Ok(BackupOutcome)` - Uploaded file name, size and Dropbox path
    /// - `Err(AppError::IntegrationErr)` - Dropbox not configured (503) or upload failed
    /// - `Err(AppError::DbErr)` - Snapshot failed
    pub async fn create(&self) -> Result<BackupOutcome, AppError> {
        if !self.dropbox.is_configured() {
            return Err(IntegrationError::NotConfigured("Dropbox").into());
        }

        let timestamp = Utc::now();
        let filename = backup_filename(timestamp);
        let snapshot =
            std::env::temp_dir().join(format!("{}_{}", uuid::Uuid::new_v4(), filename));

        let bytes = self.snapshot(&snapshot).await;
        if let Err(e) = tokio::fs::remove_file(&snapshot).await {
            tracing::warn!("Failed to remove snapshot {}: {}", snapshot.display(), e);
        }
        let bytes = bytes?;
        let size_bytes = bytes.len() as u64;

        let path = format!("{}/{}", BACKUP_FOLDER, filename);
        let entry = self.dropbox.upload(&path, bytes).await?;
        let dropbox_path = entry.path_display.unwrap_or(path);

        tracing::info!("Backup uploaded to {} ({} bytes)", dropbox_path, size_bytes);

        if let Err(e) = self.cleanup().await {
            tracing::warn!("Backup retention failed: {}", e);
        }

        Ok(BackupOutcome {
            filename: entry.name,
            size_bytes,
            timestamp,
            dropbox_path,
        })
    }

    /// Backups in the folder, newest first.
    pub async fn list(&self) -> Result<Vec<BackupFile>, AppError> {
        let mut backups: Vec<BackupFile> = self
            .dropbox
            .list_folder(BACKUP_FOLDER)
            .await?
            .into_iter()
            .filter_map(BackupFile::from_entry)
            .collect();
        sort_newest_first(&mut backups);

        Ok(backups)
    }

    /// Deletes every backup except the newest `BACKUPS_TO_KEEP`.
    pub async fn cleanup(&self) -> Result<Cleanup, AppError> {
        let backups = self.list().await?;
        let total = backups.len();
        let expired = expired_backups(backups, BACKUPS_TO_KEEP);

        let mut cleanup = Cleanup {
            deleted: Vec::with_capacity(expired.len()),
            kept: total - expired.len(),
        };
        for backup in expired {
            match self.dropbox.delete(&backup.path).await {
                Ok(()) => cleanup.deleted.push(backup.name),
                Err(e) => {
                    tracing::warn!("Failed to delete old backup {}: {}", backup.name, e);
                    cleanup.kept += 1;
                }
            }
        }

        if !cleanup.deleted.is_empty() {
            tracing::info!("Deleted {} old backups", cleanup.deleted.len());
        }

        Ok(cleanup)
    }

    /// Temporary download link for one backup.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Name does not follow the backup naming scheme
    pub async fn download_link(&self, name: &str) -> Result<String, AppError> {
        if !is_backup_name(name) {
            return Err(AppError::BadRequest("Invalid backup filename".to_string()));
        }

        let link = self
            .dropbox
            .temporary_link(&format!("{}/{}", BACKUP_FOLDER, name))
            .await?;

        Ok(link)
    }

    async fn snapshot(&self, target: &Path) -> Result<Vec<u8>, AppError> {
        let quoted = target.to_string_lossy().replace('\'', "''");
        self.db
            .execute_unprepared(&format!("VACUUM INTO '{}'", quoted))
            .await?;

        Ok(tokio::fs::read(target).await?)
    }
}

fn is_backup_name(name: &str) -> bool {
    name.starts_with(BACKUP_PREFIX)
        && name.ends_with(BACKUP_EXTENSION)
        && !name.contains(['/', '\\'])
        && !name.contains("..")
}
