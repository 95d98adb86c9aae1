//! News factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a news item created by `creator`.
pub async fn create_news(
    db: &DatabaseConnection,
    creator: &entity::user::Model,
) -> Result<entity::news::Model, DbErr> {
    let id = next_id();
    let now = Utc::now();
    entity::news::ActiveModel {
        title: ActiveValue::Set(format!("News {}", id)),
        url: ActiveValue::Set(format!("https://news.example.com/{}", id)),
        comment: ActiveValue::Set(None),
        created_by: ActiveValue::Set(creator.id),
        created_by_name: ActiveValue::Set(creator.name.clone()),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
