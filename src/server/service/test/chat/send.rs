use super::*;

/// Tests a message is stored trimmed and relayed to other sockets only.
///
/// Verifies that the sending socket is skipped while another connected user receives the
/// message event.
///
/// Expected: Ok(ChatMessage), one ReceiveMessage event on the other socket
#[tokio::test]
async fn stores_and_relays_message() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::ChatMessage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let sender = domain_user(factory::create_user(db).await?);
    let listener = factory::create_user(db).await?;
    let hub = Hub::new();
    let notifier = offline_notifier(db);

    let (sender_tx, mut sender_rx) = mpsc::unbounded_channel();
    let (listener_tx, mut listener_rx) = mpsc::unbounded_channel();
    let (sender_socket, _) = hub.connect(sender.id, sender.name.clone(), sender_tx).await;
    hub.connect(listener.id, listener.name.clone(), listener_tx)
        .await;

    let stored = ChatService::new(db, &hub, &notifier)
        .send(&sender, "  hello there  ", Some(sender_socket))
        .await?;

    assert_eq!(stored.message, "hello there");
    assert_eq!(stored.user_id, Some(sender.id));

    match listener_rx.try_recv() {
        Ok(ServerEvent::ReceiveMessage(dto)) => {
            assert_eq!(dto.id, stored.id);
            assert_eq!(dto.username, sender.name);
        }
        other => panic!("Expected ReceiveMessage event, got: {:?}", other),
    }
    assert!(sender_rx.try_recv().is_err());

    Ok(())
}

/// Tests empty and oversized messages.
///
/// Expected: Err(AppError::BadRequest), nothing stored
#[tokio::test]
async fn rejects_invalid_message() -> Result<(), AppError> {
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

    let empty = service.send(&sender, "   ", None).await;
    let too_long = service.send(&sender, &"a".repeat(1001), None).await;

    assert!(matches!(empty, Err(AppError::BadRequest(_))));
    assert!(matches!(too_long, Err(AppError::BadRequest(_))));
    assert!(service.recent(None).await?.is_empty());

    Ok(())
}
