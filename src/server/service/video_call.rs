//! Private calls and meeting rooms.
//!
//! The server only tracks who is in which call; media flows peer to peer using the
//! signaling relay of the realtime hub. Calls move from `waiting` to `active` on the first
//! join and to `ended` once the last participant leaves.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::video_call::VideoCallRepository,
    error::AppError,
    model::{
        user::User,
        video_call::{CallStatus, CallType, CreateCallParams, VideoCall},
    },
    service::auth::{hash_password, verify_password},
    util::validate::{optional_max_length, require_length},
};

pub const MAX_LISTED_CALLS: u64 = 50;

/// Meeting room settings chosen by its creator.
pub struct MeetingRoom {
    pub room_name: String,
    pub description: Option<String>,
    pub max_participants: i32,
    pub is_public: bool,
    pub password: Option<String>,
}

/// Channel credentials handed to the client. No media SDK token is signed server side.
pub struct CallToken {
    pub token: Option<String>,
    pub channel: String,
    pub uid: i64,
    pub app_id: Option<String>,
}

fn check_max_participants(max: i32) -> Result<(), AppError> {
    if !(2..=100).contains(&max) {
        return Err(AppError::BadRequest(
            "max_participants must be between 2 and 100".to_string(),
        ));
    }
    Ok(())
}

pub struct VideoCallService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VideoCallService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a call owned by `creator`. The creator is never listed as an invitee.
    pub async fn create_call(
        &self,
        creator: &User,
        call_type: CallType,
        invited_users: Vec<i32>,
        max_participants: i32,
    ) -> Result<VideoCall, AppError> {
        check_max_participants(max_participants)?;

        let mut invited_users: Vec<i32> = invited_users
            .into_iter()
            .filter(|id| *id != creator.id)
            .collect();
        invited_users.sort_unstable();
        invited_users.dedup();

        let call = VideoCallRepository::new(self.db)
            .create(CreateCallParams {
                channel_name: call_type.channel_name(),
                creator_id: creator.id,
                creator_name: creator.name.clone(),
                call_type,
                room_name: None,
                description: None,
                invited_users,
                max_participants,
                is_public: false,
                password_hash: None,
            })
            .await?;

        tracing::info!("Call {} ({}) created by {}", call.id, call.channel_name, creator.name);

        Ok(call)
    }

    /// Calls the user created, was invited to, or joined; newest first.
    pub async fn my_calls(&self, user: &User) -> Result<Vec<VideoCall>, AppError> {
        Ok(VideoCallRepository::new(self.db)
            .get_involving(user.id, MAX_LISTED_CALLS)
            .await?)
    }

    pub async fn get(&self, id: i32) -> Result<VideoCall, AppError> {
        VideoCallRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Call not found".to_string()))
    }

    /// Adds `user` to the call.
    ///
    /// # Returns
    /// - `Ok(VideoCall)` - The active call including the user
    /// - `Err(AppError::BadRequest)` - Call ended or full
    /// - `Err(AppError::Forbidden)` - Not invited to a private call, or wrong room password
    pub async fn join(
        &self,
        user: &User,
        id: i32,
        password: Option<&str>,
    ) -> Result<VideoCall, AppError> {
        let call = self.get(id).await?;

        if call.status == CallStatus::Ended {
            return Err(AppError::BadRequest("Call has already ended".to_string()));
        }
        if !call.is_invited(user.id) {
            return Err(AppError::Forbidden(
                "You are not invited to this call".to_string(),
            ));
        }
        if let Some(hash) = &call.password_hash {
            let authorized = call.creator_id == user.id
                || password.is_some_and(|password| verify_password(password, hash));
            if !authorized {
                return Err(AppError::Forbidden("Invalid room password".to_string()));
            }
        }
        if !call.has_participant(user.id) && call.is_full() {
            return Err(AppError::BadRequest("Call is full".to_string()));
        }

        VideoCallRepository::new(self.db)
            .join(id, user.id, user.name.clone(), Utc::now())
            .await?;

        self.get(id).await
    }

    /// Removes `user` from the call, ending it when nobody remains.
    pub async fn leave(&self, user: &User, id: i32) -> Result<VideoCall, AppError> {
        let call = self.get(id).await?;
        if !call.has_participant(user.id) {
            return Err(AppError::BadRequest(
                "You are not a participant of this call".to_string(),
            ));
        }

        let ended = VideoCallRepository::new(self.db)
            .leave(id, user.id, Utc::now())
            .await?;
        if ended {
            tracing::info!("Call {} ended", id);
        }

        self.get(id).await
    }

    /// Open meeting rooms that are public or owned by `viewer`.
    pub async fn meeting_rooms(&self, viewer: &User) -> Result<Vec<VideoCall>, AppError> {
        Ok(VideoCallRepository::new(self.db)
            .get_open_meeting_rooms()
            .await?
            .into_iter()
            .filter(|room| room.is_public || room.creator_id == viewer.id)
            .collect())
    }

    pub async fn create_meeting_room(
        &self,
        creator: &User,
        room: MeetingRoom,
    ) -> Result<VideoCall, AppError> {
        require_length("room_name", &room.room_name, 3, 100)?;
        optional_max_length("description", room.description.as_deref(), 500)?;
        check_max_participants(room.max_participants)?;

        let password_hash = match room.password.as_deref().map(str::trim) {
            Some(password) if !password.is_empty() => Some(hash_password(password)?),
            _ => None,
        };

        let call = VideoCallRepository::new(self.db)
            .create(CreateCallParams {
                channel_name: CallType::Meeting.channel_name(),
                creator_id: creator.id,
                creator_name: creator.name.clone(),
                call_type: CallType::Meeting,
                room_name: Some(room.room_name.trim().to_string()),
                description: room.description,
                invited_users: Vec::new(),
                max_participants: room.max_participants,
                is_public: room.is_public,
                password_hash,
            })
            .await?;

        tracing::info!("Meeting room {} created by {}", call.id, creator.name);

        Ok(call)
    }

    /// Ended calls the user created or took part in.
    pub async fn call_history(&self, user: &User) -> Result<Vec<VideoCall>, AppError> {
        Ok(VideoCallRepository::new(self.db)
            .get_ended_for(user.id, MAX_LISTED_CALLS)
            .await?)
    }

    /// Deletes a meeting room. Creator only, and only once it is empty.
    pub async fn delete_meeting_room(&self, user: &User, id: i32) -> Result<(), AppError> {
        let room = self.get(id).await?;

        if room.call_type != CallType::Meeting {
            return Err(AppError::BadRequest("Call is not a meeting room".to_string()));
        }
        if room.creator_id != user.id {
            return Err(AppError::Forbidden(
                "Only the creator can delete this meeting room".to_string(),
            ));
        }
        if room.status != CallStatus::Ended && !room.participants.is_empty() {
            return Err(AppError::BadRequest(
                "Cannot delete a meeting room with active participants".to_string(),
            ));
        }

        VideoCallRepository::new(self.db).delete(id).await?;

        Ok(())
    }

    /// Builds channel credentials. `uid` defaults to the caller's user id.
    pub fn generate_token(
        &self,
        user: &User,
        channel_name: &str,
        uid: Option<i64>,
    ) -> Result<CallToken, AppError> {
        require_length("channel_name", channel_name, 1, 64)?;

        Ok(CallToken {
            token: None,
            channel: channel_name.trim().to_string(),
            uid: uid.unwrap_or(i64::from(user.id)),
            app_id: None,
        })
    }

    pub async fn active_calls(&self) -> Result<u64, AppError> {
        Ok(VideoCallRepository::new(self.db).count_active().await?)
    }
}
