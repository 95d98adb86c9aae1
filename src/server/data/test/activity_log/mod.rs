use crate::server::{
    data::activity_log::ActivityLogRepository,
    model::activity_log::{ActivityLogFilter, EventType},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::activity_log::create_activity_log};

mod delete_before;
mod delete_by_usernames;
mod find;
