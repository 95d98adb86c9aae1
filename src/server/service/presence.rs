//! Online presence.
//!
//! A user counts as online while their `last_seen` timestamp is inside a five minute
//! window. The timestamp is refreshed by every authenticated request and by websocket
//! activity.

use chrono::{DateTime, Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{data::user::UserRepository, error::AppError, model::user::User};

/// How long after their last activity a user still counts as online.
pub const ONLINE_THRESHOLD: Duration = Duration::minutes(5);

pub fn is_online(last_seen: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    last_seen.is_some_and(|seen| seen > now - ONLINE_THRESHOLD)
}

pub struct PresenceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PresenceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn touch(&self, user_id: i32) -> Result<(), AppError> {
        Ok(UserRepository::new(self.db)
            .touch_last_seen(user_id, Utc::now())
            .await?)
    }

    /// Active users seen within the threshold, most recent first.
    pub async fn online_users(&self) -> Result<Vec<User>, AppError> {
        let since = Utc::now() - ONLINE_THRESHOLD;

        Ok(UserRepository::new(self.db).find_seen_since(since).await?)
    }

    /// Clears `last_seen` for users outside the window.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of users marked offline
    pub async fn cleanup_offline(&self) -> Result<u64, AppError> {
        let before = Utc::now() - ONLINE_THRESHOLD;
        let cleared = UserRepository::new(self.db)
            .clear_last_seen_before(before)
            .await?;

        if cleared > 0 {
            tracing::debug!("Marked {} users offline", cleared);
        }

        Ok(cleared)
    }
}
