//! Doodle poll factory.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for a doodle poll with two options (`opt-a`, `opt-b`).
pub struct DoodleFactory<'a> {
    db: &'a DatabaseConnection,
    creator_id: i32,
    creator_name: String,
    deadline: Option<DateTime<Utc>>,
    max_participants: Option<i32>,
    allow_maybe: bool,
    is_public: bool,
    status: String,
}

impl<'a> DoodleFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, creator_id: i32, creator_name: &str) -> Self {
        Self {
            db,
            creator_id,
            creator_name: creator_name.to_string(),
            deadline: None,
            max_participants: None,
            allow_maybe: true,
            is_public: true,
            status: "active".to_string(),
        }
    }

    pub fn deadline(mut self, deadline: DateTime<Utc>) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn max_participants(mut self, max: i32) -> Self {
        self.max_participants = Some(max);
        self
    }

    pub fn allow_maybe(mut self, allow: bool) -> Self {
        self.allow_maybe = allow;
        self
    }

    pub fn private(mut self) -> Self {
        self.is_public = false;
        self
    }

    pub fn status(mut self, status: &str) -> Self {
        self.status = status.to_string();
        self
    }

    pub async fn build(self) -> Result<entity::doodle::Model, DbErr> {
        let now = Utc::now();
        let doodle = entity::doodle::ActiveModel {
            title: ActiveValue::Set(format!("Meeting {}", next_id())),
            description: ActiveValue::Set(None),
            creator_id: ActiveValue::Set(self.creator_id),
            creator_name: ActiveValue::Set(self.creator_name),
            is_public: ActiveValue::Set(self.is_public),
            deadline: ActiveValue::Set(self.deadline),
            max_participants: ActiveValue::Set(self.max_participants),
            allow_comments: ActiveValue::Set(true),
            allow_maybe: ActiveValue::Set(self.allow_maybe),
            status: ActiveValue::Set(self.status),
            final_option: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            closed_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for (position, option_id) in ["opt-a", "opt-b"].iter().enumerate() {
            entity::doodle_option::ActiveModel {
                doodle_id: ActiveValue::Set(doodle.id),
                option_id: ActiveValue::Set(option_id.to_string()),
                datetime: ActiveValue::Set(now + Duration::days(position as i64 + 1)),
                label: ActiveValue::Set(format!("Option {}", position + 1)),
                position: ActiveValue::Set(position as i32),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(doodle)
    }
}
