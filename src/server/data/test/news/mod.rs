use crate::server::{data::news::NewsRepository, model::news::UpdateNewsParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod update;
