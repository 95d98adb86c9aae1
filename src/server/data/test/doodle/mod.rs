use std::collections::BTreeMap;

use crate::server::{
    data::doodle::DoodleRepository,
    model::doodle::{Answer, DoodleStatus, SubmitResponseParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::doodle::DoodleFactory};

mod close;
mod create;
mod expire_past_deadline;
mod get_all;
mod replace_response;
