use crate::server::{
    data::video_call::VideoCallRepository,
    model::video_call::CallStatus,
};
use chrono::Utc;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_involving;
mod get_open_meeting_rooms;
mod join;
mod leave;
