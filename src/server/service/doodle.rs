//! Calendar polls ("doodles").
//!
//! A poll lists candidate dates; participants answer yes/no/maybe per option until the
//! creator closes it or its deadline passes. Expiry is applied lazily when polls are listed.

use std::collections::{BTreeMap, HashSet};

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::doodle::DoodleRepository,
    error::AppError,
    model::{
        doodle::{Answer, CreateDoodleParams, Doodle, DoodleStatus, SubmitResponseParams},
        user::User,
    },
    util::validate::{optional_max_length, require_length},
};

pub const MAX_LISTED_DOODLES: u64 = 100;

pub struct DoodleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DoodleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an active poll.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Title outside 3..=200, description over 1000
    ///   characters, fewer than 2 or more than 20 options, or duplicate option ids
    pub async fn create(&self, params: CreateDoodleParams) -> Result<Doodle, AppError> {
        require_length("title", &params.title, 3, 200)?;
        optional_max_length("description", params.description.as_deref(), 1000)?;

        if !(2..=20).contains(&params.options.len()) {
            return Err(AppError::BadRequest(
                "A doodle needs between 2 and 20 options".to_string(),
            ));
        }
        let mut seen = HashSet::new();
        for option in &params.options {
            require_length("label", &option.label, 1, 200)?;
            if !seen.insert(option.option_id.as_str()) {
                return Err(AppError::BadRequest(format!(
                    "Duplicate option ID: {}",
                    option.option_id
                )));
            }
        }
        if params.max_participants.is_some_and(|max| max < 1) {
            return Err(AppError::BadRequest(
                "max_participants must be at least 1".to_string(),
            ));
        }

        let doodle = DoodleRepository::new(self.db).create(params).await?;

        tracing::info!("Doodle {} created by {}", doodle.id, doodle.creator_name);

        Ok(doodle)
    }

    /// Lists polls visible to `viewer`, newest first, after expiring overdue ones.
    ///
    /// Private polls are only listed for their creator.
    pub async fn list(
        &self,
        viewer: &User,
        status: Option<DoodleStatus>,
        created_by_me: bool,
    ) -> Result<Vec<Doodle>, AppError> {
        let repo = DoodleRepository::new(self.db);

        let expired = repo.expire_past_deadline(Utc::now()).await?;
        if expired > 0 {
            tracing::info!("Marked {} doodles as expired", expired);
        }

        let creator = created_by_me.then_some(viewer.id);
        let doodles = repo
            .get_all(viewer.id, status, creator, MAX_LISTED_DOODLES)
            .await?;

        Ok(doodles)
    }

    /// Gets a poll `viewer` may see. Another user's private poll is reported as missing.
    pub async fn get(&self, viewer: &User, id: i32) -> Result<Doodle, AppError> {
        DoodleRepository::new(self.db)
            .find_by_id(id)
            .await?
            .filter(|doodle| doodle.is_public || doodle.creator_id == viewer.id)
            .ok_or_else(|| AppError::NotFound("Doodle not found".to_string()))
    }

    /// Records `user`'s answers, replacing their earlier response.
    ///
    /// # Returns
    /// - `Ok(Doodle)` - The poll including the new response
    /// - `Err(AppError::BadRequest)` - No answers, poll not active, deadline passed, unknown
    ///   option, disallowed maybe/comment, or the participant limit is reached
    /// - `Err(AppError::NotFound)` - No such poll, or another user's private poll
    pub async fn respond(
        &self,
        user: &User,
        id: i32,
        answers: BTreeMap<String, Answer>,
        comment: Option<String>,
    ) -> Result<Doodle, AppError> {
        let doodle = self.get(user, id).await?;

        optional_max_length("comment", comment.as_deref(), 500)?;
        let comment = comment.filter(|comment| !comment.trim().is_empty());
        if comment.is_some() && !doodle.allow_comments {
            return Err(AppError::BadRequest(
                "Comments are not allowed for this doodle".to_string(),
            ));
        }
        doodle
            .check_response(user.id, &answers, Utc::now())
            .map_err(AppError::BadRequest)?;

        DoodleRepository::new(self.db)
            .replace_response(SubmitResponseParams {
                doodle_id: id,
                user_id: user.id,
                username: user.name.clone(),
                answers,
                comment,
            })
            .await?;

        self.get(user, id).await
    }

    /// Closes the poll with its chosen option. Creator only.
    pub async fn close(
        &self,
        user: &User,
        id: i32,
        final_option: &str,
    ) -> Result<Doodle, AppError> {
        let doodle = self.get(user, id).await?;
        check_creator(user, &doodle, "close")?;

        if !doodle.has_option(final_option) {
            return Err(AppError::BadRequest(format!(
                "Invalid option ID: {}",
                final_option
            )));
        }

        DoodleRepository::new(self.db)
            .close(id, final_option.to_string(), Utc::now())
            .await?;

        tracing::info!("Doodle {} closed by {}", id, user.name);

        self.get(user, id).await
    }

    /// Deletes the poll with its options and responses. Creator only.
    pub async fn delete(&self, user: &User, id: i32) -> Result<(), AppError> {
        let doodle = self.get(user, id).await?;
        check_creator(user, &doodle, "delete")?;

        DoodleRepository::new(self.db).delete(id).await?;

        Ok(())
    }
}

fn check_creator(user: &User, doodle: &Doodle, action: &str) -> Result<(), AppError> {
    if doodle.creator_id == user.id {
        return Ok(());
    }
    Err(AppError::Forbidden(format!(
        "Only the creator can {} this doodle",
        action
    )))
}
