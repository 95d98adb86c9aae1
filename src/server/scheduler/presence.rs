use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::AppError, service::presence::PresenceService};

/// Starts the presence cleanup scheduler
///
/// Runs at the top of every hour and clears `last_seen` for users who have been silent
/// longer than the online window, so they stop showing up as online.
///
/// # Arguments
/// - `db`: Database connection
pub async fn start_scheduler(db: DatabaseConnection) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async("0 0 * * * *", move |_uuid, _lock| {
        let db = db.clone();

        Box::pin(async move {
            match PresenceService::new(&db).cleanup_offline().await {
                Ok(cleared) => {
                    if cleared > 0 {
                        tracing::info!("Cleared presence for {} offline users", cleared);
                    }
                }
                Err(e) => tracing::error!("Error cleaning up presence: {}", e),
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Presence cleanup scheduler started");

    Ok(())
}
