//! Activity log data repository for database operations.
//!
//! This module provides the `ActivityLogRepository` for the security audit trail: login
//! attempts, logouts, password changes and admin actions. It supports filtered listing,
//! time-window reads for statistics and retention cleanup.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::activity_log::{ActivityLog, ActivityLogFilter, NewActivityLog};

/// Repository providing database operations for activity logs.
pub struct ActivityLogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ActivityLogRepository<'a> {
    /// Creates a new ActivityLogRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ActivityLogRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends an entry timestamped now.
    pub async fn create(&self, log: NewActivityLog) -> Result<ActivityLog, DbErr> {
        let entity = entity::activity_log::ActiveModel {
            username: ActiveValue::Set(log.username),
            event_type: ActiveValue::Set(log.event_type.as_str().to_string()),
            ip_address: ActiveValue::Set(log.ip_address),
            user_agent: ActiveValue::Set(log.user_agent),
            success: ActiveValue::Set(log.success),
            additional_info: ActiveValue::Set(log.additional_info),
            timestamp: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        ActivityLog::from_entity(entity)
    }

    /// Gets entries matching `filter`, newest first.
    ///
    /// The username filter is a substring match; SQLite `LIKE` ignores ASCII case.
    pub async fn find(&self, filter: ActivityLogFilter) -> Result<Vec<ActivityLog>, DbErr> {
        use entity::activity_log::Column;

        let mut query = entity::prelude::ActivityLog::find();
        if let Some(username) = filter.username.filter(|u| !u.is_empty()) {
            query = query.filter(Column::Username.contains(username));
        }
        if let Some(event_type) = filter.event_type {
            query = query.filter(Column::EventType.eq(event_type.as_str()));
        }
        if let Some(success) = filter.success {
            query = query.filter(Column::Success.eq(success));
        }
        if let Some(start) = filter.start_date {
            query = query.filter(Column::Timestamp.gte(start));
        }
        if let Some(end) = filter.end_date {
            query = query.filter(Column::Timestamp.lte(end));
        }

        query
            .order_by_desc(Column::Timestamp)
            .order_by_desc(Column::Id)
            .offset(filter.offset)
            .limit(filter.limit)
            .all(self.db)
            .await?
            .into_iter()
            .map(ActivityLog::from_entity)
            .collect()
    }

    /// Gets every entry recorded at or after `since`.
    pub async fn get_since(&self, since: DateTime<Utc>) -> Result<Vec<ActivityLog>, DbErr> {
        entity::prelude::ActivityLog::find()
            .filter(entity::activity_log::Column::Timestamp.gte(since))
            .all(self.db)
            .await?
            .into_iter()
            .map(ActivityLog::from_entity)
            .collect()
    }

    /// Gets the newest `limit` entries of one user.
    pub async fn get_by_username(
        &self,
        username: &str,
        limit: u64,
    ) -> Result<Vec<ActivityLog>, DbErr> {
        entity::prelude::ActivityLog::find()
            .filter(entity::activity_log::Column::Username.eq(username))
            .order_by_desc(entity::activity_log::Column::Timestamp)
            .order_by_desc(entity::activity_log::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?
            .into_iter()
            .map(ActivityLog::from_entity)
            .collect()
    }

    /// Deletes entries recorded before `cutoff`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of deleted entries
    pub async fn delete_before(&self, cutoff: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::ActivityLog::delete_many()
            .filter(entity::activity_log::Column::Timestamp.lt(cutoff))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes every entry of each listed user.
    ///
    /// # Returns
    /// - `Ok(BTreeMap)` - Deleted entry count per username, zero counts included
    pub async fn delete_by_usernames(
        &self,
        usernames: &[String],
    ) -> Result<BTreeMap<String, u64>, DbErr> {
        let mut summary = BTreeMap::new();

        for username in usernames {
            let result = entity::prelude::ActivityLog::delete_many()
                .filter(entity::activity_log::Column::Username.eq(username.as_str()))
                .exec(self.db)
                .await?;

            *summary.entry(username.clone()).or_insert(0) += result.rows_affected;
        }

        Ok(summary)
    }
}
