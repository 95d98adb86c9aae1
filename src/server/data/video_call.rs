//! Video call data repository for database operations.
//!
//! This module provides the `VideoCallRepository` for private calls and meeting rooms.
//! Participants live in their own table and are loaded with every call read.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::{Expr, Query},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::server::model::video_call::{CallStatus, CallType, CreateCallParams, VideoCall};

/// Repository providing database operations for video calls.
pub struct VideoCallRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VideoCallRepository<'a> {
    /// Creates a new VideoCallRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `VideoCallRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a call in the `waiting` state without participants.
    ///
    /// # Returns
    /// - `Ok(VideoCall)` - The created call
    /// - `Err(DbErr)` - Database error, including a channel name collision
    pub async fn create(&self, params: CreateCallParams) -> Result<VideoCall, DbErr> {
        let entity = entity::video_call::ActiveModel {
            channel_name: ActiveValue::Set(params.channel_name),
            creator_id: ActiveValue::Set(params.creator_id),
            creator_name: ActiveValue::Set(params.creator_name),
            call_type: ActiveValue::Set(params.call_type.as_str().to_string()),
            room_name: ActiveValue::Set(params.room_name),
            description: ActiveValue::Set(params.description),
            invited_users: ActiveValue::Set(serde_json::Value::from(params.invited_users)),
            status: ActiveValue::Set(CallStatus::Waiting.as_str().to_string()),
            max_participants: ActiveValue::Set(params.max_participants),
            is_public: ActiveValue::Set(params.is_public),
            password_hash: ActiveValue::Set(params.password_hash),
            created_at: ActiveValue::Set(Utc::now()),
            started_at: ActiveValue::Set(None),
            ended_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        VideoCall::from_entity(entity, Vec::new())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<VideoCall>, DbErr> {
        let Some(call) = entity::prelude::VideoCall::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut calls = self.assemble(vec![call]).await?;
        Ok(calls.pop())
    }

    /// Gets calls the user created, was invited to or joined, newest first.
    pub async fn get_involving(
        &self,
        user_id: i32,
        limit: u64,
    ) -> Result<Vec<VideoCall>, DbErr> {
        let calls = entity::prelude::VideoCall::find()
            .filter(involving(user_id))
            .order_by_desc(entity::video_call::Column::CreatedAt)
            .order_by_desc(entity::video_call::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        self.assemble(calls).await
    }

    /// Gets meeting rooms that are waiting or active, newest first.
    pub async fn get_open_meeting_rooms(&self) -> Result<Vec<VideoCall>, DbErr> {
        let calls = entity::prelude::VideoCall::find()
            .filter(entity::video_call::Column::CallType.eq(CallType::Meeting.as_str()))
            .filter(entity::video_call::Column::Status.is_in([
                CallStatus::Waiting.as_str(),
                CallStatus::Active.as_str(),
            ]))
            .order_by_desc(entity::video_call::Column::CreatedAt)
            .all(self.db)
            .await?;

        self.assemble(calls).await
    }

    /// Gets ended calls the user created or is still listed in, most recently ended first.
    pub async fn get_ended_for(
        &self,
        user_id: i32,
        limit: u64,
    ) -> Result<Vec<VideoCall>, DbErr> {
        let calls = entity::prelude::VideoCall::find()
            .filter(entity::video_call::Column::Status.eq(CallStatus::Ended.as_str()))
            .filter(created_or_joined(user_id))
            .order_by_desc(entity::video_call::Column::EndedAt)
            .order_by_desc(entity::video_call::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        self.assemble(calls).await
    }

    pub async fn count_active(&self) -> Result<u64, DbErr> {
        entity::prelude::VideoCall::find()
            .filter(entity::video_call::Column::Status.eq(CallStatus::Active.as_str()))
            .count(self.db)
            .await
    }

    /// Adds a participant and marks the call active.
    ///
    /// Joining twice keeps a single participant row. `started_at` is only set the first
    /// time the call becomes active.
    pub async fn join(
        &self,
        call_id: i32,
        user_id: i32,
        username: String,
        at: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;

        let existing = entity::prelude::VideoCallParticipant::find()
            .filter(entity::video_call_participant::Column::CallId.eq(call_id))
            .filter(entity::video_call_participant::Column::UserId.eq(user_id))
            .one(&txn)
            .await?;

        if existing.is_none() {
            entity::video_call_participant::ActiveModel {
                call_id: ActiveValue::Set(call_id),
                user_id: ActiveValue::Set(user_id),
                username: ActiveValue::Set(username),
                joined_at: ActiveValue::Set(at),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
        }

        entity::prelude::VideoCall::update_many()
            .col_expr(
                entity::video_call::Column::Status,
                Expr::value(CallStatus::Active.as_str()),
            )
            .filter(entity::video_call::Column::Id.eq(call_id))
            .exec(&txn)
            .await?;

        entity::prelude::VideoCall::update_many()
            .col_expr(entity::video_call::Column::StartedAt, Expr::value(at))
            .filter(entity::video_call::Column::Id.eq(call_id))
            .filter(entity::video_call::Column::StartedAt.is_null())
            .exec(&txn)
            .await?;

        txn.commit().await
    }

    /// Removes a participant and ends the call once nobody is left.
    ///
    /// # Returns
    /// - `Ok(true)` - The call ended as a result
    /// - `Ok(false)` - Participants remain, or the call does not exist
    pub async fn leave(
        &self,
        call_id: i32,
        user_id: i32,
        at: DateTime<Utc>,
    ) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::VideoCallParticipant::delete_many()
            .filter(entity::video_call_participant::Column::CallId.eq(call_id))
            .filter(entity::video_call_participant::Column::UserId.eq(user_id))
            .exec(&txn)
            .await?;

        let remaining = entity::prelude::VideoCallParticipant::find()
            .filter(entity::video_call_participant::Column::CallId.eq(call_id))
            .one(&txn)
            .await?;

        let mut ended = false;
        if remaining.is_none() {
            let result = entity::prelude::VideoCall::update_many()
                .col_expr(
                    entity::video_call::Column::Status,
                    Expr::value(CallStatus::Ended.as_str()),
                )
                .col_expr(entity::video_call::Column::EndedAt, Expr::value(at))
                .filter(entity::video_call::Column::Id.eq(call_id))
                .exec(&txn)
                .await?;
            ended = result.rows_affected > 0;
        }

        txn.commit().await?;

        Ok(ended)
    }

    /// Deletes a call and its participant rows.
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::VideoCallParticipant::delete_many()
            .filter(entity::video_call_participant::Column::CallId.eq(id))
            .exec(&txn)
            .await?;
        let result = entity::prelude::VideoCall::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(result.rows_affected)
    }

    /// Loads participants for `calls`, preserving their order.
    async fn assemble(
        &self,
        calls: Vec<entity::video_call::Model>,
    ) -> Result<Vec<VideoCall>, DbErr> {
        if calls.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i32> = calls.iter().map(|c| c.id).collect();
        let mut participants: HashMap<i32, Vec<entity::video_call_participant::Model>> =
            HashMap::new();
        for participant in entity::prelude::VideoCallParticipant::find()
            .filter(entity::video_call_participant::Column::CallId.is_in(ids))
            .order_by_asc(entity::video_call_participant::Column::JoinedAt)
            .all(self.db)
            .await?
        {
            participants
                .entry(participant.call_id)
                .or_default()
                .push(participant);
        }

        calls
            .into_iter()
            .map(|call| {
                let id = call.id;
                VideoCall::from_entity(call, participants.remove(&id).unwrap_or_default())
            })
            .collect()
    }
}

/// Calls created by `user_id` or with them as a participant.
fn created_or_joined(user_id: i32) -> Condition {
    Condition::any()
        .add(entity::video_call::Column::CreatorId.eq(user_id))
        .add(
            entity::video_call::Column::Id.in_subquery(
                Query::select()
                    .column(entity::video_call_participant::Column::CallId)
                    .from(entity::video_call_participant::Entity)
                    .and_where(entity::video_call_participant::Column::UserId.eq(user_id))
                    .to_owned(),
            ),
        )
}

/// As `created_or_joined`, plus calls listing `user_id` in `invited_users`.
fn involving(user_id: i32) -> Condition {
    created_or_joined(user_id).add(Expr::cust_with_values(
        "EXISTS (SELECT 1 FROM json_each(\"video_call\".\"invited_users\") \
         WHERE json_each.value = ?)",
        [user_id],
    ))
}
