//! Video call and meeting room domain models.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use rand::{distr::Alphanumeric, Rng};
use sea_orm::DbErr;

use crate::{
    model::video_call::{
        CallHistoryEntryDto, CallStatusDto, CallTypeDto, ParticipantDto, VideoCallDto,
    },
    server::util::parse::{parse_json_column, parse_stored},
};

const CHANNEL_TOKEN_LEN: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallType {
    Private,
    Meeting,
}

impl CallType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Private => "private",
            Self::Meeting => "meeting",
        }
    }

    /// Generates a fresh channel name: `call_<token>` or `room_<token>`.
    pub fn channel_name(&self) -> String {
        let token: String = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(CHANNEL_TOKEN_LEN)
            .map(char::from)
            .collect();

        match self {
            Self::Private => format!("call_{}", token),
            Self::Meeting => format!("room_{}", token),
        }
    }
}

impl FromStr for CallType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "private" => Ok(Self::Private),
            "meeting" => Ok(Self::Meeting),
            _ => Err(()),
        }
    }
}

impl From<CallTypeDto> for CallType {
    fn from(dto: CallTypeDto) -> Self {
        match dto {
            CallTypeDto::Private => Self::Private,
            CallTypeDto::Meeting => Self::Meeting,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallStatus {
    Waiting,
    Active,
    Ended,
}

impl CallStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Waiting => "waiting",
            Self::Active => "active",
            Self::Ended => "ended",
        }
    }
}

impl FromStr for CallStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "waiting" => Ok(Self::Waiting),
            "active" => Ok(Self::Active),
            "ended" => Ok(Self::Ended),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Participant {
    pub user_id: i32,
    pub username: String,
    pub joined_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VideoCall {
    pub id: i32,
    pub channel_name: String,
    pub creator_id: i32,
    pub creator_name: String,
    pub call_type: CallType,
    pub room_name: Option<String>,
    pub description: Option<String>,
    pub invited_users: Vec<i32>,
    pub status: CallStatus,
    pub max_participants: i32,
    pub is_public: bool,
    pub password_hash: Option<String>,
    pub participants: Vec<Participant>,
    pub created_at: DateTime<Utc>,
    pub started_at: Option<DateTime<Utc>>,
    pub ended_at: Option<DateTime<Utc>>,
}

impl VideoCall {
    pub fn from_entity(
        entity: entity::video_call::Model,
        participants: Vec<entity::video_call_participant::Model>,
    ) -> Result<Self, DbErr> {
        Ok(Self {
            call_type: parse_stored("call type", &entity.call_type)?,
            status: parse_stored("call status", &entity.status)?,
            invited_users: parse_json_column("invited_users", entity.invited_users)?,
            participants: participants
                .into_iter()
                .map(|p| Participant {
                    user_id: p.user_id,
                    username: p.username,
                    joined_at: p.joined_at,
                })
                .collect(),
            id: entity.id,
            channel_name: entity.channel_name,
            creator_id: entity.creator_id,
            creator_name: entity.creator_name,
            room_name: entity.room_name,
            description: entity.description,
            max_participants: entity.max_participants,
            is_public: entity.is_public,
            password_hash: entity.password_hash,
            created_at: entity.created_at,
            started_at: entity.started_at,
            ended_at: entity.ended_at,
        })
    }

    pub fn has_participant(&self, user_id: i32) -> bool {
        self.participants.iter().any(|p| p.user_id == user_id)
    }

    /// Private calls admit only the creator and invitees; meeting rooms admit anyone.
    pub fn is_invited(&self, user_id: i32) -> bool {
        match self.call_type {
            CallType::Private => {
                self.creator_id == user_id || self.invited_users.contains(&user_id)
            }
            CallType::Meeting => true,
        }
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants.max(0) as usize
    }

    pub fn duration_seconds(&self) -> Option<i64> {
        match (self.started_at, self.ended_at) {
            (Some(start), Some(end)) => Some((end - start).num_seconds().max(0)),
            _ => None,
        }
    }

    pub fn into_dto(self) -> VideoCallDto {
        VideoCallDto {
            has_password: self.password_hash.is_some(),
            id: self.id,
            channel_name: self.channel_name,
            creator_id: self.creator_id,
            creator_name: self.creator_name,
            call_type: match self.call_type {
                CallType::Private => CallTypeDto::Private,
                CallType::Meeting => CallTypeDto::Meeting,
            },
            room_name: self.room_name,
            description: self.description,
            invited_users: self.invited_users,
            status: match self.status {
                CallStatus::Waiting => CallStatusDto::Waiting,
                CallStatus::Active => CallStatusDto::Active,
                CallStatus::Ended => CallStatusDto::Ended,
            },
            max_participants: self.max_participants,
            is_public: self.is_public,
            participants: self
                .participants
                .into_iter()
                .map(|p| ParticipantDto {
                    user_id: p.user_id,
                    username: p.username,
                    joined_at: p.joined_at,
                })
                .collect(),
            created_at: self.created_at,
            started_at: self.started_at,
            ended_at: self.ended_at,
        }
    }

    pub fn into_history_dto(self) -> CallHistoryEntryDto {
        CallHistoryEntryDto {
            duration: self.duration_seconds(),
            call: self.into_dto(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCallParams {
    pub channel_name: String,
    pub creator_id: i32,
    pub creator_name: String,
    pub call_type: CallType,
    pub room_name: Option<String>,
    pub description: Option<String>,
    pub invited_users: Vec<i32>,
    pub max_participants: i32,
    pub is_public: bool,
    pub password_hash: Option<String>,
}
