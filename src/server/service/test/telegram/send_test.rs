use super::*;

/// Tests the test message is delivered to the user's own chat.
///
/// Expected: Ok(()), one request addressed to the user's chat id
#[tokio::test]
async fn sends_to_own_chat() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let server = MockServer::start().await;
    accept_messages(&server).await;

    let user = domain_user(
        factory::user::UserFactory::new(db)
            .telegram("4242")
            .build()
            .await?,
    );
    let notifier = notifier(db, &server);

    TelegramService::new(db, &notifier)
        .send_test(&user, "hola")
        .await?;

    let requests = server.received_requests().await.unwrap_or_default();
    assert_eq!(requests.len(), 1);
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["chat_id"], "4242");
    assert_eq!(body["parse_mode"], "HTML");

    Ok(())
}

/// Tests users without a linked chat.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn requires_linked_chat() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let server = MockServer::start().await;
    let user = domain_user(factory::create_user(db).await?);
    let notifier = notifier(db, &server);

    let result = TelegramService::new(db, &notifier)
        .send_test(&user, "hola")
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests a Bot API rejection is surfaced to the caller.
///
/// Expected: Err(IntegrationError::Upstream)
#[tokio::test]
async fn surfaces_upstream_error() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/bot{}/sendMessage", BOT_TOKEN)))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "ok": false,
            "description": "Forbidden: bot was blocked by the user"
        })))
        .mount(&server)
        .await;

    let user = domain_user(
        factory::user::UserFactory::new(db)
            .telegram("4242")
            .build()
            .await?,
    );
    let notifier = notifier(db, &server);

    let result = TelegramService::new(db, &notifier)
        .send_test(&user, "hola")
        .await;

    match result {
        Err(AppError::IntegrationErr(IntegrationError::Upstream { message, .. })) => {
            assert!(message.contains("blocked"))
        }
        other => panic!("Expected Upstream error, got: {:?}", other),
    }

    Ok(())
}
