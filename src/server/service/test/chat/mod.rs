use tokio::sync::mpsc;

use crate::server::{
    error::AppError,
    integration::{mailer::Mailer, telegram::TelegramClient},
    realtime::{event::ServerEvent, hub::Hub},
    service::{chat::ChatService, notification::dispatcher::Notifier, test::domain_user},
};
use test_utils::{builder::TestBuilder, factory};

mod recent;
mod send;

fn offline_notifier(db: &sea_orm::DatabaseConnection) -> Notifier {
    Notifier::new(
        db.clone(),
        Mailer::disabled(),
        TelegramClient::new(reqwest::Client::new(), None),
        "http://localhost:5173".to_string(),
    )
}
