use crate::server::{
    data::user::UserRepository,
    model::user::{CreateUserParams, EmailPreferencesUpdate, Role, UpdateUserParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod admin_exists;
mod create;
mod find_seen_since;
mod update;
mod update_email_preferences_many;
