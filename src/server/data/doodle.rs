//! Doodle poll data repository for database operations.
//!
//! This module provides the `DoodleRepository` for scheduling polls. A poll is stored as
//! one `doodle` row with its options and responses in child tables; every read assembles
//! the three into a single `Doodle` domain model.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection,
    DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::server::model::doodle::{CreateDoodleParams, Doodle, DoodleStatus, SubmitResponseParams};

/// Repository providing database operations for doodle polls.
pub struct DoodleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DoodleRepository<'a> {
    /// Creates a new DoodleRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `DoodleRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts an active poll and its options in one transaction.
    ///
    /// # Arguments
    /// - `params` - Poll definition; option ids must already be assigned
    ///
    /// # Returns
    /// - `Ok(Doodle)` - The created poll without responses
    /// - `Err(DbErr)` - Database error; nothing is stored
    pub async fn create(&self, params: CreateDoodleParams) -> Result<Doodle, DbErr> {
        let txn = self.db.begin().await?;

        let doodle = entity::doodle::ActiveModel {
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            creator_id: ActiveValue::Set(params.creator_id),
            creator_name: ActiveValue::Set(params.creator_name),
            is_public: ActiveValue::Set(params.is_public),
            deadline: ActiveValue::Set(params.deadline),
            max_participants: ActiveValue::Set(params.max_participants),
            allow_comments: ActiveValue::Set(params.allow_comments),
            allow_maybe: ActiveValue::Set(params.allow_maybe),
            status: ActiveValue::Set(DoodleStatus::Active.as_str().to_string()),
            final_option: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            closed_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let mut options = Vec::with_capacity(params.options.len());
        for (position, option) in params.options.into_iter().enumerate() {
            let option = entity::doodle_option::ActiveModel {
                doodle_id: ActiveValue::Set(doodle.id),
                option_id: ActiveValue::Set(option.option_id),
                datetime: ActiveValue::Set(option.datetime),
                label: ActiveValue::Set(option.label),
                position: ActiveValue::Set(position as i32),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
            options.push(option);
        }

        txn.commit().await?;

        Doodle::from_entity(doodle, options, Vec::new())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Doodle>, DbErr> {
        let Some(doodle) = entity::prelude::Doodle::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut doodles = self.assemble(vec![doodle]).await?;
        Ok(doodles.pop())
    }

    /// Gets polls visible to a user, newest first.
    ///
    /// # Arguments
    /// - `viewer_id` - Private polls are only returned when this user created them
    /// - `status` - Restrict to one status
    /// - `creator_id` - Restrict to polls created by this user
    /// - `limit` - Maximum number of polls
    pub async fn get_all(
        &self,
        viewer_id: i32,
        status: Option<DoodleStatus>,
        creator_id: Option<i32>,
        limit: u64,
    ) -> Result<Vec<Doodle>, DbErr> {
        let mut query = entity::prelude::Doodle::find().filter(
            Condition::any()
                .add(entity::doodle::Column::IsPublic.eq(true))
                .add(entity::doodle::Column::CreatorId.eq(viewer_id)),
        );
        if let Some(status) = status {
            query = query.filter(entity::doodle::Column::Status.eq(status.as_str()));
        }
        if let Some(creator_id) = creator_id {
            query = query.filter(entity::doodle::Column::CreatorId.eq(creator_id));
        }

        let doodles = query
            .order_by_desc(entity::doodle::Column::CreatedAt)
            .order_by_desc(entity::doodle::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        self.assemble(doodles).await
    }

    /// Marks active polls whose deadline is before `now` as expired.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of polls that expired
    pub async fn expire_past_deadline(&self, now: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::Doodle::update_many()
            .col_expr(
                entity::doodle::Column::Status,
                Expr::value(DoodleStatus::Expired.as_str()),
            )
            .filter(entity::doodle::Column::Status.eq(DoodleStatus::Active.as_str()))
            .filter(entity::doodle::Column::Deadline.lt(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Stores a participant's answers, replacing any earlier response of theirs.
    pub async fn replace_response(&self, params: SubmitResponseParams) -> Result<(), DbErr> {
        let answers = serde_json::to_value(&params.answers)
            .map_err(|e| DbErr::Custom(format!("Failed to encode doodle answers: {}", e)))?;

        let txn = self.db.begin().await?;

        entity::prelude::DoodleResponse::delete_many()
            .filter(entity::doodle_response::Column::DoodleId.eq(params.doodle_id))
            .filter(entity::doodle_response::Column::UserId.eq(params.user_id))
            .exec(&txn)
            .await?;

        entity::doodle_response::ActiveModel {
            doodle_id: ActiveValue::Set(params.doodle_id),
            user_id: ActiveValue::Set(params.user_id),
            username: ActiveValue::Set(params.username),
            responses: ActiveValue::Set(answers),
            comment: ActiveValue::Set(params.comment),
            responded_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await
    }

    /// Closes a poll with its chosen option.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of updated polls (0 when the poll does not exist)
    pub async fn close(
        &self,
        id: i32,
        final_option: String,
        at: DateTime<Utc>,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::Doodle::update_many()
            .col_expr(
                entity::doodle::Column::Status,
                Expr::value(DoodleStatus::Closed.as_str()),
            )
            .col_expr(entity::doodle::Column::FinalOption, Expr::value(final_option))
            .col_expr(entity::doodle::Column::ClosedAt, Expr::value(at))
            .filter(entity::doodle::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes a poll with its options and responses.
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::DoodleResponse::delete_many()
            .filter(entity::doodle_response::Column::DoodleId.eq(id))
            .exec(&txn)
            .await?;
        entity::prelude::DoodleOption::delete_many()
            .filter(entity::doodle_option::Column::DoodleId.eq(id))
            .exec(&txn)
            .await?;
        let result = entity::prelude::Doodle::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(result.rows_affected)
    }

    /// Loads options and responses for `doodles`, preserving their order.
    async fn assemble(&self, doodles: Vec<entity::doodle::Model>) -> Result<Vec<Doodle>, DbErr> {
        if doodles.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i32> = doodles.iter().map(|d| d.id).collect();
        let mut options = group_by_doodle(
            entity::prelude::DoodleOption::find()
                .filter(entity::doodle_option::Column::DoodleId.is_in(ids.clone()))
                .order_by_asc(entity::doodle_option::Column::Position)
                .all(self.db)
                .await?,
            |option| option.doodle_id,
        );
        let mut responses = group_by_doodle(
            entity::prelude::DoodleResponse::find()
                .filter(entity::doodle_response::Column::DoodleId.is_in(ids))
                .order_by_asc(entity::doodle_response::Column::RespondedAt)
                .all(self.db)
                .await?,
            |response| response.doodle_id,
        );

        doodles
            .into_iter()
            .map(|doodle| {
                let id = doodle.id;
                Doodle::from_entity(
                    doodle,
                    options.remove(&id).unwrap_or_default(),
                    responses.remove(&id).unwrap_or_default(),
                )
            })
            .collect()
    }
}

fn group_by_doodle<T>(rows: Vec<T>, key: impl Fn(&T) -> i32) -> HashMap<i32, Vec<T>> {
    let mut grouped: HashMap<i32, Vec<T>> = HashMap::new();
    for row in rows {
        grouped.entry(key(&row)).or_default().push(row);
    }
    grouped
}
