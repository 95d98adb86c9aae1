use crate::server::{
    data::file::FileRepository,
    model::file::{CreateFileParams, SourceType},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_all;
