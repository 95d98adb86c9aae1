//! Activity log domain models and statistics.

use std::{
    collections::{BTreeMap, HashSet},
    str::FromStr,
};

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::activity_log::{ActivityLogDto, ActivityStatsDto, EventCountsDto, EventTypeDto},
    server::util::parse::parse_stored,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventType {
    Login,
    Logout,
    PasswordChange,
    PostView,
    AdminAction,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Logout => "logout",
            Self::PasswordChange => "password_change",
            Self::PostView => "post_view",
            Self::AdminAction => "admin_action",
        }
    }
}

impl FromStr for EventType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "login" => Ok(Self::Login),
            "logout" => Ok(Self::Logout),
            "password_change" => Ok(Self::PasswordChange),
            "post_view" => Ok(Self::PostView),
            "admin_action" => Ok(Self::AdminAction),
            _ => Err(()),
        }
    }
}

impl From<EventTypeDto> for EventType {
    fn from(dto: EventTypeDto) -> Self {
        match dto {
            EventTypeDto::Login => Self::Login,
            EventTypeDto::Logout => Self::Logout,
            EventTypeDto::PasswordChange => Self::PasswordChange,
            EventTypeDto::PostView => Self::PostView,
            EventTypeDto::AdminAction => Self::AdminAction,
        }
    }
}

impl From<EventType> for EventTypeDto {
    fn from(event: EventType) -> Self {
        match event {
            EventType::Login => Self::Login,
            EventType::Logout => Self::Logout,
            EventType::PasswordChange => Self::PasswordChange,
            EventType::PostView => Self::PostView,
            EventType::AdminAction => Self::AdminAction,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActivityLog {
    pub id: i32,
    pub username: String,
    pub event_type: EventType,
    pub ip_address: String,
    pub user_agent: Option<String>,
    pub success: bool,
    pub additional_info: Option<serde_json::Value>,
    pub timestamp: DateTime<Utc>,
}

impl ActivityLog {
    pub fn from_entity(entity: entity::activity_log::Model) -> Result<Self, DbErr> {
        Ok(Self {
            event_type: parse_stored("event type", &entity.event_type)?,
            id: entity.id,
            username: entity.username,
            ip_address: entity.ip_address,
            user_agent: entity.user_agent,
            success: entity.success,
            additional_info: entity.additional_info,
            timestamp: entity.timestamp,
        })
    }

    pub fn into_dto(self) -> ActivityLogDto {
        ActivityLogDto {
            id: self.id,
            username: self.username,
            event_type: self.event_type.into(),
            ip_address: self.ip_address,
            user_agent: self.user_agent,
            success: self.success,
            additional_info: self.additional_info,
            timestamp: self.timestamp,
        }
    }
}

/// A new log entry.
#[derive(Debug, Clone)]
pub struct NewActivityLog {
    pub username: String,
    pub event_type: EventType,
    pub ip_address: String,
    pub user_agent: Option<String>,
    pub success: bool,
    pub additional_info: Option<serde_json::Value>,
}

/// Filters for the admin listing. `limit` and `offset` are already clamped.
#[derive(Debug, Clone, Default)]
pub struct ActivityLogFilter {
    pub username: Option<String>,
    pub event_type: Option<EventType>,
    pub success: Option<bool>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub limit: u64,
    pub offset: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActivityStats {
    pub period_days: i64,
    pub total_events: u64,
    pub by_event: BTreeMap<EventType, (u64, u64)>,
    pub unique_users: u64,
    pub failed_logins: u64,
}

impl ActivityStats {
    /// Aggregates the logs of a period into per-event success/failure counts.
    pub fn from_logs(period_days: i64, logs: &[ActivityLog]) -> Self {
        let mut by_event: BTreeMap<EventType, (u64, u64)> = BTreeMap::new();
        let mut users = HashSet::new();
        let mut failed_logins = 0;

        for log in logs {
            let counts = by_event.entry(log.event_type).or_default();
            if log.success {
                counts.0 += 1;
            } else {
                counts.1 += 1;
                if log.event_type == EventType::Login {
                    failed_logins += 1;
                }
            }
            users.insert(log.username.as_str());
        }

        Self {
            period_days,
            total_events: logs.len() as u64,
            by_event,
            unique_users: users.len() as u64,
            failed_logins,
        }
    }

    pub fn into_dto(self) -> ActivityStatsDto {
        ActivityStatsDto {
            period_days: self.period_days,
            total_events: self.total_events,
            by_event: self
                .by_event
                .into_iter()
                .map(|(event, (success, failed))| {
                    (
                        event.as_str().to_string(),
                        EventCountsDto { success, failed },
                    )
                })
                .collect(),
            unique_users: self.unique_users,
            failed_logins: self.failed_logins,
        }
    }
}
