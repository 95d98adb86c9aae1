use crate::server::{
    error::AppError,
    model::news::{CreateNewsParams, UpdateNewsParams},
    service::{news::NewsService, test::domain_user},
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod update;
