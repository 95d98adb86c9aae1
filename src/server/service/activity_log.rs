//! Activity log service.
//!
//! Logins, logouts, password changes and admin actions are recorded for auditing.
//! Recording is best effort: a failed insert is logged and swallowed so it never fails
//! the request that triggered it.

use chrono::{DateTime, Duration, Utc};
use sea_orm::DatabaseConnection;
use std::collections::BTreeMap;

use crate::server::{
    data::activity_log::ActivityLogRepository,
    error::AppError,
    model::activity_log::{
        ActivityLog, ActivityLogFilter, ActivityStats, EventType, NewActivityLog,
    },
    util::request::RequestMeta,
};

pub const MAX_LIST_LIMIT: u64 = 1000;
pub const MAX_USER_LOG_LIMIT: u64 = 500;

pub struct ActivityLogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ActivityLogService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records an event without propagating storage failures.
    ///
    /// # Arguments
    /// - `username` - Actor name (the attempted name for failed logins)
    /// - `event_type` - Kind of event
    /// - `meta` - Client address and user agent
    /// - `success` - Whether the action succeeded
    /// - `additional_info` - Free-form JSON context
    pub async fn record(
        &self,
        username: &str,
        event_type: EventType,
        meta: &RequestMeta,
        success: bool,
        additional_info: Option<serde_json::Value>,
    ) {
        let entry = NewActivityLog {
            username: username.to_string(),
            event_type,
            ip_address: meta.ip_address.clone(),
            user_agent: meta.user_agent.clone(),
            success,
            additional_info,
        };

        if let Err(e) = ActivityLogRepository::new(self.db).create(entry).await {
            tracing::warn!(
                "Failed to record {} activity for {}: {}",
                event_type.as_str(),
                username,
                e
            );
        }
    }

    /// Lists log entries matching `filter`, newest first.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Limit outside 1..=1000
    pub async fn list(&self, filter: ActivityLogFilter) -> Result<Vec<ActivityLog>, AppError> {
        if filter.limit == 0 || filter.limit > MAX_LIST_LIMIT {
            return Err(AppError::BadRequest(format!(
                "limit must be between 1 and {}",
                MAX_LIST_LIMIT
            )));
        }

        Ok(ActivityLogRepository::new(self.db).find(filter).await?)
    }

    /// Aggregates the events of the last `days` days.
    pub async fn stats(&self, days: i64) -> Result<ActivityStats, AppError> {
        if !(1..=365).contains(&days) {
            return Err(AppError::BadRequest(
                "days must be between 1 and 365".to_string(),
            ));
        }

        let since = Utc::now() - Duration::days(days);
        let logs = ActivityLogRepository::new(self.db).get_since(since).await?;

        Ok(ActivityStats::from_logs(days, &logs))
    }

    pub async fn user_logs(
        &self,
        username: &str,
        limit: u64,
    ) -> Result<Vec<ActivityLog>, AppError> {
        if limit == 0 || limit > MAX_USER_LOG_LIMIT {
            return Err(AppError::BadRequest(format!(
                "limit must be between 1 and {}",
                MAX_USER_LOG_LIMIT
            )));
        }

        Ok(ActivityLogRepository::new(self.db)
            .get_by_username(username, limit)
            .await?)
    }

    /// Deletes entries older than `days` days.
    ///
    /// # Returns
    /// - `Ok((deleted, cutoff))` - Number of removed entries and the cutoff used
    /// - `Err(AppError::BadRequest)` - `days` outside 30..=365
    pub async fn cleanup(&self, days: i64) -> Result<(u64, DateTime<Utc>), AppError> {
        if !(30..=365).contains(&days) {
            return Err(AppError::BadRequest(
                "days must be between 30 and 365".to_string(),
            ));
        }

        let cutoff = Utc::now() - Duration::days(days);
        let deleted = ActivityLogRepository::new(self.db)
            .delete_before(cutoff)
            .await?;

        tracing::info!("Removed {} activity log entries older than {}", deleted, cutoff);

        Ok((deleted, cutoff))
    }

    /// Deletes every entry of the given users.
    ///
    /// # Returns
    /// - `Ok((total, per_user))` - Total and per-username deletion counts
    /// - `Err(AppError::BadRequest)` - No usernames given
    pub async fn bulk_delete(
        &self,
        usernames: &[String],
    ) -> Result<(u64, BTreeMap<String, u64>), AppError> {
        let usernames: Vec<String> = usernames
            .iter()
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();

        if usernames.is_empty() {
            return Err(AppError::BadRequest("No usernames provided".to_string()));
        }

        let summary = ActivityLogRepository::new(self.db)
            .delete_by_usernames(&usernames)
            .await?;
        let total = summary.values().sum();

        Ok((total, summary))
    }
}
