use super::*;

/// Tests history is returned oldest first and capped by the limit.
///
/// Expected: the two newest messages in chronological order
#[tokio::test]
async fn returns_newest_messages_in_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::ChatMessage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let sender = domain_user(factory::create_user(db).await?);
    let hub = Hub::new();
    let notifier = offline_notifier(db);
    let service = ChatService::new(db, &hub, &notifier);

    for text in ["one", "two", "three"] {
        service.send(&sender, text, None).await?;
    }

    let messages: Vec<String> = service
        .recent(Some(2))
        .await?
        .into_iter()
        .map(|m| m.message)
        .collect();

    assert_eq!(messages, vec!["two", "three"]);

    Ok(())
}

/// Tests limits outside 1..=200.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_out_of_range_limit() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ChatMessage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hub = Hub::new();
    let notifier = offline_notifier(db);
    let service = ChatService::new(db, &hub, &notifier);

    assert!(matches!(
        service.recent(Some(0)).await,
        Err(AppError::BadRequest(_))
    ));
    assert!(matches!(
        service.recent(Some(201)).await,
        Err(AppError::BadRequest(_))
    ));

    Ok(())
}
