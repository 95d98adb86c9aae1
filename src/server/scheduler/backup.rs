//! Scheduled database backups.
//!
//! Unlike the presence job, the backup job can be stopped and restarted from the admin API,
//! so the scheduler handle and its last results live in a shared [`BackupScheduler`].

use std::{sync::Arc, time::Duration};

use chrono::Utc;
use sea_orm::DatabaseConnection;
use tokio::sync::{Mutex, RwLock};
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    error::AppError, integration::dropbox::DropboxClient, model::backup::SchedulerStatus,
    service::backup::BackupService,
};

#[derive(Clone)]
pub struct BackupScheduler {
    db: DatabaseConnection,
    dropbox: DropboxClient,
    interval_hours: u32,
    enabled: bool,
    scheduler: Arc<Mutex<Option<JobScheduler>>>,
    status: Arc<RwLock<SchedulerStatus>>,
}

impl BackupScheduler {
    /// Creates a stopped scheduler. Intervals below one hour are raised to one hour.
    pub fn new(
        db: DatabaseConnection,
        dropbox: DropboxClient,
        interval_hours: u32,
        enabled: bool,
    ) -> Self {
        let interval_hours = interval_hours.max(1);

        Self {
            db,
            dropbox,
            interval_hours,
            enabled,
            scheduler: Arc::new(Mutex::new(None)),
            status: Arc::new(RwLock::new(SchedulerStatus {
                enabled,
                interval_hours,
                ..Default::default()
            })),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub async fn status(&self) -> SchedulerStatus {
        self.status.read().await.clone()
    }

    /// Starts the repeating backup job.
    ///
    /// The first backup runs one full interval after start.
    ///
    /// # Returns
    /// - `Ok(true)` - Scheduler started
    /// - `Ok(false)` - Scheduler was already running
    /// - `Err(AppError::SchedulerErr(_))` - Failed to create or start the job
    pub async fn start(&self) -> Result<bool, AppError> {
        let mut handle = self.scheduler.lock().await;
        if handle.is_some() {
            return Ok(false);
        }

        let interval = Duration::from_secs(u64::from(self.interval_hours) * 3600);
        let next_run = Utc::now() + chrono::Duration::hours(i64::from(self.interval_hours));
        let scheduler = JobScheduler::new().await?;

        let job_scheduler = self.clone();
        let job = Job::new_repeated_async(interval, move |_uuid, _lock| {
            let this = job_scheduler.clone();

            Box::pin(async move {
                this.run_once().await;
            })
        })?;

        scheduler.add(job).await?;
        scheduler.start().await?;
        *handle = Some(scheduler);

        let mut status = self.status.write().await;
        status.running = true;
        status.next_backup_estimate = Some(next_run);

        tracing::info!(
            "Backup scheduler started, running every {} hours",
            self.interval_hours
        );

        Ok(true)
    }

    /// Stops the backup job.
    ///
    /// # Returns
    /// - `Ok(true)` - Scheduler stopped
    /// - `Ok(false)` - Scheduler was not running
    pub async fn stop(&self) -> Result<bool, AppError> {
        let mut handle = self.scheduler.lock().await;
        let Some(mut scheduler) = handle.take() else {
            return Ok(false);
        };

        scheduler.shutdown().await?;

        let mut status = self.status.write().await;
        status.running = false;
        status.next_backup_estimate = None;

        tracing::info!("Backup scheduler stopped");

        Ok(true)
    }

    /// Runs one backup and records the result. Failures are logged, never propagated.
    pub async fn run_once(&self) {
        let started = Utc::now();
        let result = BackupService::new(&self.db, &self.dropbox).create().await;

        let mut status = self.status.write().await;
        status.last_run = Some(started);
        match result {
            Ok(outcome) => {
                tracing::info!(
                    "Scheduled backup {} uploaded ({} bytes)",
                    outcome.filename,
                    outcome.size_bytes
                );
                status.last_success = Some(true);
                status.last_error = None;
            }
            Err(e) => {
                tracing::error!("Scheduled backup failed: {}", e);
                status.last_success = Some(false);
                status.last_error = Some(e.to_string());
            }
        }
        if status.running {
            status.next_backup_estimate =
                Some(Utc::now() + chrono::Duration::hours(i64::from(self.interval_hours)));
        }
    }
}
