use super::*;

/// Tests the broadcast reaches only subscribed users and counts failures.
///
/// Verifies that users without Telegram are skipped and that a chat rejected by the Bot API
/// is counted as failed without aborting the broadcast.
///
/// Expected: two recipients, one sent and one failed
#[tokio::test]
async fn counts_sent_and_failed() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/bot{}/sendMessage", BOT_TOKEN)))
        .and(body_partial_json(json!({"chat_id": "999"})))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "ok": false,
            "description": "Bad Request: chat not found"
        })))
        .with_priority(1)
        .mount(&server)
        .await;
    accept_messages(&server).await;

    let admin = domain_user(factory::user::create_admin(db).await?);
    factory::user::UserFactory::new(db)
        .telegram("111")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .telegram("999")
        .build()
        .await?;
    factory::create_user(db).await?;
    factory::user::UserFactory::new(db)
        .telegram("222")
        .active(false)
        .build()
        .await?;

    let notifier = notifier(db, &server);
    let outcome = TelegramService::new(db, &notifier)
        .broadcast(&admin, "Server maintenance tonight")
        .await?;

    assert_eq!(outcome.total_users, 2);
    assert_eq!(outcome.sent_count, 1);
    assert_eq!(outcome.failed_count, 1);

    Ok(())
}

/// Tests an empty message is refused before anything is sent.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_empty_message() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let server = MockServer::start().await;
    let admin = domain_user(factory::user::create_admin(db).await?);
    let notifier = notifier(db, &server);

    let result = TelegramService::new(db, &notifier)
        .broadcast(&admin, "  ")
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(server.received_requests().await.unwrap_or_default().is_empty());

    Ok(())
}
