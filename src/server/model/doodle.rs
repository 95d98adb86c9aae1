//! Doodle (meeting poll) domain models.
//!
//! A doodle offers a set of date options; each participant answers yes/no/maybe per option.
//! Options and responses are stored in child tables, the per-option answers of a response in
//! a JSON column.

use std::{collections::BTreeMap, str::FromStr};

use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use serde::{Deserialize, Serialize};

use crate::{
    model::calendar::{
        AnswerDto, CreateDoodleDto, DoodleDetailDto, DoodleOptionDto, DoodleResponseDto,
        DoodleSettingsDto, DoodleStatusDto, DoodleSummaryDto, OptionStatsDto,
    },
    server::util::parse::{parse_json_column, parse_stored},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoodleStatus {
    Active,
    Closed,
    Expired,
}

impl DoodleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Closed => "closed",
            Self::Expired => "expired",
        }
    }

    pub fn into_dto(self) -> DoodleStatusDto {
        match self {
            Self::Active => DoodleStatusDto::Active,
            Self::Closed => DoodleStatusDto::Closed,
            Self::Expired => DoodleStatusDto::Expired,
        }
    }
}

impl FromStr for DoodleStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "closed" => Ok(Self::Closed),
            "expired" => Ok(Self::Expired),
            _ => Err(()),
        }
    }
}

impl From<DoodleStatusDto> for DoodleStatus {
    fn from(dto: DoodleStatusDto) -> Self {
        match dto {
            DoodleStatusDto::Active => Self::Active,
            DoodleStatusDto::Closed => Self::Closed,
            DoodleStatusDto::Expired => Self::Expired,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Answer {
    Yes,
    No,
    Maybe,
}

impl From<AnswerDto> for Answer {
    fn from(dto: AnswerDto) -> Self {
        match dto {
            AnswerDto::Yes => Self::Yes,
            AnswerDto::No => Self::No,
            AnswerDto::Maybe => Self::Maybe,
        }
    }
}

impl From<Answer> for AnswerDto {
    fn from(answer: Answer) -> Self {
        match answer {
            Answer::Yes => Self::Yes,
            Answer::No => Self::No,
            Answer::Maybe => Self::Maybe,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DoodleOption {
    pub option_id: String,
    pub datetime: DateTime<Utc>,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DoodleResponse {
    pub user_id: i32,
    pub username: String,
    pub answers: BTreeMap<String, Answer>,
    pub comment: Option<String>,
    pub responded_at: DateTime<Utc>,
}

impl DoodleResponse {
    pub fn from_entity(entity: entity::doodle_response::Model) -> Result<Self, DbErr> {
        Ok(Self {
            answers: parse_json_column("responses", entity.responses)?,
            user_id: entity.user_id,
            username: entity.username,
            comment: entity.comment,
            responded_at: entity.responded_at,
        })
    }

    fn into_dto(self) -> DoodleResponseDto {
        DoodleResponseDto {
            user_id: self.user_id,
            username: self.username,
            responses: self
                .answers
                .into_iter()
                .map(|(option_id, answer)| (option_id, answer.into()))
                .collect(),
            comment: self.comment,
            responded_at: self.responded_at,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OptionStats {
    pub yes: u32,
    pub no: u32,
    pub maybe: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Doodle {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub creator_id: i32,
    pub creator_name: String,
    pub is_public: bool,
    pub deadline: Option<DateTime<Utc>>,
    pub max_participants: Option<i32>,
    pub allow_comments: bool,
    pub allow_maybe: bool,
    pub status: DoodleStatus,
    pub final_option: Option<String>,
    pub created_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
    pub options: Vec<DoodleOption>,
    pub responses: Vec<DoodleResponse>,
}

impl Doodle {
    /// Converts the poll row and its children at the repository boundary.
    pub fn from_entity(
        entity: entity::doodle::Model,
        options: Vec<entity::doodle_option::Model>,
        responses: Vec<entity::doodle_response::Model>,
    ) -> Result<Self, DbErr> {
        let mut options = options;
        options.sort_by_key(|option| option.position);

        Ok(Self {
            status: parse_stored("doodle status", &entity.status)?,
            responses: responses
                .into_iter()
                .map(DoodleResponse::from_entity)
                .collect::<Result<_, _>>()?,
            options: options
                .into_iter()
                .map(|option| DoodleOption {
                    option_id: option.option_id,
                    datetime: option.datetime,
                    label: option.label,
                })
                .collect(),
            id: entity.id,
            title: entity.title,
            description: entity.description,
            creator_id: entity.creator_id,
            creator_name: entity.creator_name,
            is_public: entity.is_public,
            deadline: entity.deadline,
            max_participants: entity.max_participants,
            allow_comments: entity.allow_comments,
            allow_maybe: entity.allow_maybe,
            final_option: entity.final_option,
            created_at: entity.created_at,
            closed_at: entity.closed_at,
        })
    }

    pub fn has_option(&self, option_id: &str) -> bool {
        self.options.iter().any(|option| option.option_id == option_id)
    }

    pub fn is_participant(&self, user_id: i32) -> bool {
        self.responses.iter().any(|response| response.user_id == user_id)
    }

    /// Yes/no/maybe counts per option. Answers for unknown options are ignored.
    pub fn option_stats(&self) -> BTreeMap<String, OptionStats> {
        let mut stats: BTreeMap<String, OptionStats> = self
            .options
            .iter()
            .map(|option| (option.option_id.clone(), OptionStats::default()))
            .collect();

        for response in &self.responses {
            for (option_id, answer) in &response.answers {
                if let Some(entry) = stats.get_mut(option_id) {
                    match answer {
                        Answer::Yes => entry.yes += 1,
                        Answer::No => entry.no += 1,
                        Answer::Maybe => entry.maybe += 1,
                    }
                }
            }
        }

        stats
    }

    /// Checks whether `user_id` may submit `answers` at `now`.
    ///
    /// # Returns
    /// - `Ok(())` - The response is acceptable
    /// - `Err(String)` - Human readable rejection reason
    pub fn check_response(
        &self,
        user_id: i32,
        answers: &BTreeMap<String, Answer>,
        now: DateTime<Utc>,
    ) -> Result<(), String> {
        if self.status != DoodleStatus::Active {
            return Err("Doodle is not active for responses".to_string());
        }

        if self.deadline.is_some_and(|deadline| now > deadline) {
            return Err("Doodle deadline has passed".to_string());
        }

        if answers.is_empty() {
            return Err("At least one answer is required".to_string());
        }

        for (option_id, answer) in answers {
            if !self.has_option(option_id) {
                return Err(format!("Invalid option ID: {}", option_id));
            }
            if *answer == Answer::Maybe && !self.allow_maybe {
                return Err("Maybe answers are not allowed for this doodle".to_string());
            }
        }

        if let Some(max) = self.max_participants {
            if !self.is_participant(user_id) && self.responses.len() >= max.max(0) as usize {
                return Err("Maximum number of participants reached".to_string());
            }
        }

        Ok(())
    }

    fn settings_dto(&self) -> DoodleSettingsDto {
        DoodleSettingsDto {
            is_public: self.is_public,
            deadline: self.deadline,
            max_participants: self.max_participants,
            allow_comments: self.allow_comments,
            allow_maybe: self.allow_maybe,
        }
    }

    pub fn into_summary_dto(self, user_id: i32) -> DoodleSummaryDto {
        DoodleSummaryDto {
            is_participant: self.is_participant(user_id),
            total_options: self.options.len(),
            total_responses: self.responses.len(),
            id: self.id,
            title: self.title,
            description: self.description,
            creator_id: self.creator_id,
            creator_name: self.creator_name,
            status: self.status.into_dto(),
            deadline: self.deadline,
            created_at: self.created_at,
        }
    }

    pub fn into_detail_dto(self) -> DoodleDetailDto {
        let option_stats = self
            .option_stats()
            .into_iter()
            .map(|(option_id, stats)| {
                (
                    option_id,
                    OptionStatsDto {
                        yes: stats.yes,
                        no: stats.no,
                        maybe: stats.maybe,
                    },
                )
            })
            .collect();
        let settings = self.settings_dto();

        DoodleDetailDto {
            total_responses: self.responses.len(),
            option_stats,
            settings,
            id: self.id,
            title: self.title,
            description: self.description,
            creator_id: self.creator_id,
            creator_name: self.creator_name,
            options: self
                .options
                .into_iter()
                .map(|option| DoodleOptionDto {
                    option_id: option.option_id,
                    datetime: option.datetime,
                    label: option.label,
                })
                .collect(),
            status: self.status.into_dto(),
            final_option: self.final_option,
            responses: self
                .responses
                .into_iter()
                .map(DoodleResponse::into_dto)
                .collect(),
            created_at: self.created_at,
            closed_at: self.closed_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateDoodleParams {
    pub title: String,
    pub description: Option<String>,
    pub creator_id: i32,
    pub creator_name: String,
    pub options: Vec<DoodleOption>,
    pub is_public: bool,
    pub deadline: Option<DateTime<Utc>>,
    pub max_participants: Option<i32>,
    pub allow_comments: bool,
    pub allow_maybe: bool,
}

impl CreateDoodleParams {
    /// Builds creation params, assigning a UUID v4 to options without an id.
    pub fn from_dto(dto: CreateDoodleDto, creator_id: i32, creator_name: String) -> Self {
        Self {
            title: dto.title.trim().to_string(),
            description: dto.description,
            creator_id,
            creator_name,
            options: dto
                .options
                .into_iter()
                .map(|option| DoodleOption {
                    option_id: option
                        .option_id
                        .map(|id| id.trim().to_string())
                        .filter(|id| !id.is_empty())
                        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
                    datetime: option.datetime,
                    label: option.label,
                })
                .collect(),
            is_public: dto.settings.is_public,
            deadline: dto.settings.deadline,
            max_participants: dto.settings.max_participants,
            allow_comments: dto.settings.allow_comments,
            allow_maybe: dto.settings.allow_maybe,
        }
    }
}

/// A participant's answers, replacing any earlier ones.
#[derive(Debug, Clone)]
pub struct SubmitResponseParams {
    pub doodle_id: i32,
    pub user_id: i32,
    pub username: String,
    pub answers: BTreeMap<String, Answer>,
    pub comment: Option<String>,
}
