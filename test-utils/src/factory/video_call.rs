//! Video call factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for video calls in the `waiting` state.
pub struct VideoCallFactory<'a> {
    db: &'a DatabaseConnection,
    creator: &'a entity::user::Model,
    call_type: String,
    invited_users: Vec<i32>,
    max_participants: i32,
    is_public: bool,
    status: String,
}

impl<'a> VideoCallFactory<'a> {
    /// Defaults to a public meeting room with room for 50 participants.
    pub fn new(db: &'a DatabaseConnection, creator: &'a entity::user::Model) -> Self {
        Self {
            db,
            creator,
            call_type: "meeting".to_string(),
            invited_users: Vec::new(),
            max_participants: 50,
            is_public: true,
            status: "waiting".to_string(),
        }
    }

    /// Makes the call private with the given invitees.
    pub fn private(mut self, invited_users: Vec<i32>) -> Self {
        self.call_type = "private".to_string();
        self.invited_users = invited_users;
        self
    }

    pub fn max_participants(mut self, max: i32) -> Self {
        self.max_participants = max;
        self
    }

    pub fn status(mut self, status: &str) -> Self {
        self.status = status.to_string();
        self
    }

    pub async fn build(self) -> Result<entity::video_call::Model, DbErr> {
        let id = next_id();
        let prefix = if self.call_type == "private" { "call" } else { "room" };
        entity::video_call::ActiveModel {
            channel_name: ActiveValue::Set(format!("{}_{}", prefix, id)),
            creator_id: ActiveValue::Set(self.creator.id),
            creator_name: ActiveValue::Set(self.creator.name.clone()),
            call_type: ActiveValue::Set(self.call_type),
            room_name: ActiveValue::Set(Some(format!("Room {}", id))),
            description: ActiveValue::Set(None),
            invited_users: ActiveValue::Set(serde_json::json!(self.invited_users)),
            status: ActiveValue::Set(self.status),
            max_participants: ActiveValue::Set(self.max_participants),
            is_public: ActiveValue::Set(self.is_public),
            password_hash: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            started_at: ActiveValue::Set(None),
            ended_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
