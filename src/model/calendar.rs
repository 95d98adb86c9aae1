use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DoodleStatusDto {
    Active,
    Closed,
    Expired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AnswerDto {
    Yes,
    No,
    Maybe,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DoodleOptionInputDto {
    #[serde(default)]
    pub option_id: Option<String>,
    pub datetime: DateTime<Utc>,
    pub label: String,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DoodleSettingsDto {
    #[serde(default = "default_true")]
    pub is_public: bool,
    pub deadline: Option<DateTime<Utc>>,
    pub max_participants: Option<i32>,
    #[serde(default = "default_true")]
    pub allow_comments: bool,
    #[serde(default = "default_true")]
    pub allow_maybe: bool,
}

impl Default for DoodleSettingsDto {
    fn default() -> Self {
        Self {
            is_public: true,
            deadline: None,
            max_participants: None,
            allow_comments: true,
            allow_maybe: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateDoodleDto {
    pub title: String,
    pub description: Option<String>,
    pub options: Vec<DoodleOptionInputDto>,
    #[serde(default)]
    pub settings: DoodleSettingsDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RespondDoodleDto {
    pub responses: BTreeMap<String, AnswerDto>,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CloseDoodleDto {
    pub final_option: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DoodleOptionDto {
    pub option_id: String,
    pub datetime: DateTime<Utc>,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DoodleResponseDto {
    pub user_id: i32,
    pub username: String,
    pub responses: BTreeMap<String, AnswerDto>,
    pub comment: Option<String>,
    pub responded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OptionStatsDto {
    pub yes: u32,
    pub no: u32,
    pub maybe: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DoodleSummaryDto {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub creator_id: i32,
    pub creator_name: String,
    pub status: DoodleStatusDto,
    pub deadline: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub total_options: usize,
    pub total_responses: usize,
    pub is_participant: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DoodleDetailDto {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub creator_id: i32,
    pub creator_name: String,
    pub options: Vec<DoodleOptionDto>,
    pub settings: DoodleSettingsDto,
    pub status: DoodleStatusDto,
    pub final_option: Option<String>,
    pub responses: Vec<DoodleResponseDto>,
    pub total_responses: usize,
    pub option_stats: BTreeMap<String, OptionStatsDto>,
    pub created_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
}
