use std::collections::BTreeMap;

use chrono::{Duration, Utc};

use crate::server::{
    error::AppError,
    model::doodle::{Answer, CreateDoodleParams, DoodleOption, DoodleStatus},
    service::{doodle::DoodleService, test::domain_user},
};
use test_utils::{builder::TestBuilder, factory};

mod close;
mod create;
mod get;
mod list;

fn option(id: &str, days: i64) -> DoodleOption {
    DoodleOption {
        option_id: id.to_string(),
        datetime: Utc::now() + Duration::days(days),
        label: format!("Day {}", days),
    }
}

fn params(creator_id: i32, options: Vec<DoodleOption>) -> CreateDoodleParams {
    CreateDoodleParams {
        title: "Team dinner".to_string(),
        description: None,
        creator_id,
        creator_name: "planner".to_string(),
        options,
        is_public: true,
        deadline: None,
        max_participants: None,
        allow_comments: true,
        allow_maybe: true,
    }
}

fn answers(pairs: &[(&str, Answer)]) -> BTreeMap<String, Answer> {
    pairs
        .iter()
        .map(|(id, answer)| (id.to_string(), *answer))
        .collect()
}
