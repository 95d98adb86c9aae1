use crate::server::data::chat_message::ChatMessageRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_recent;
