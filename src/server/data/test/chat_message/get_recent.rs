use super::*;

/// Tests that the newest messages are returned in chronological order.
///
/// Creates three messages and asks for two.
///
/// Expected: the two newest, oldest of them first
#[tokio::test]
async fn returns_newest_in_chronological_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ChatMessage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::chat_message::create_chat_message(db, "ana", "first", 30).await?;
    factory::chat_message::create_chat_message(db, "ben", "second", 20).await?;
    factory::chat_message::create_chat_message(db, "ana", "third", 10).await?;

    let repo = ChatMessageRepository::new(db);
    let messages: Vec<String> = repo
        .get_recent(2)
        .await?
        .into_iter()
        .map(|m| m.message)
        .collect();

    assert_eq!(messages, vec!["second", "third"]);

    Ok(())
}

/// Tests that stored messages are typed as text.
///
/// Expected: message_type "text"
#[tokio::test]
async fn stores_text_messages() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ChatMessage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ChatMessageRepository::new(db);
    let message = repo
        .create(Some(1), "ana".to_string(), "hola".to_string())
        .await?;

    assert_eq!(message.message_type, "text");
    assert_eq!(message.user_id, Some(1));

    Ok(())
}
