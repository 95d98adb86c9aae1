use serde_json::json;
use wiremock::{
    matchers::{body_partial_json, method, path},
    Mock, MockServer, ResponseTemplate,
};

use crate::server::{
    error::{integration::IntegrationError, AppError},
    integration::{mailer::Mailer, telegram::TelegramClient},
    service::{notification::dispatcher::Notifier, telegram::TelegramService, test::domain_user},
};
use test_utils::{builder::TestBuilder, factory};

mod broadcast;
mod send_test;

const BOT_TOKEN: &str = "TOKEN";

fn notifier(db: &sea_orm::DatabaseConnection, server: &MockServer) -> Notifier {
    Notifier::new(
        db.clone(),
        Mailer::disabled(),
        TelegramClient::with_base_url(
            reqwest::Client::new(),
            &server.uri(),
            Some(BOT_TOKEN.to_string()),
        ),
        "http://localhost:5173".to_string(),
    )
}

async fn accept_messages(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(format!("/bot{}/sendMessage", BOT_TOKEN)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true, "result": {}})))
        .mount(server)
        .await;
}
