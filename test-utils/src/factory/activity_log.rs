//! Activity log factory.

use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts an activity log entry recorded `days_ago` days in the past.
pub async fn create_activity_log(
    db: &DatabaseConnection,
    username: &str,
    event_type: &str,
    success: bool,
    days_ago: i64,
) -> Result<entity::activity_log::Model, DbErr> {
    entity::activity_log::ActiveModel {
        username: ActiveValue::Set(username.to_string()),
        event_type: ActiveValue::Set(event_type.to_string()),
        ip_address: ActiveValue::Set("127.0.0.1".to_string()),
        user_agent: ActiveValue::Set(Some("test-agent".to_string())),
        success: ActiveValue::Set(success),
        additional_info: ActiveValue::Set(None),
        timestamp: ActiveValue::Set(Utc::now() - Duration::days(days_ago)),
        ..Default::default()
    }
    .insert(db)
    .await
}
