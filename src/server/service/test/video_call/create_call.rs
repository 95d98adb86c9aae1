use super::*;

/// Tests the creator is dropped from the invite list and duplicates collapse.
///
/// Expected: Ok(VideoCall) waiting, invitees deduplicated without the creator
#[tokio::test]
async fn normalizes_invitees() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_video_call_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = domain_user(factory::create_user(db).await?);

    let call = VideoCallService::new(db)
        .create_call(&creator, CallType::Private, vec![7, creator.id, 3, 7], 10)
        .await?;

    assert_eq!(call.invited_users, vec![3, 7]);
    assert_eq!(call.status, CallStatus::Waiting);
    assert_eq!(call.creator_id, creator.id);

    Ok(())
}

/// Tests participant limits outside 2..=100.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_invalid_limit() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_video_call_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = domain_user(factory::create_user(db).await?);
    let service = VideoCallService::new(db);

    let too_small = service
        .create_call(&creator, CallType::Private, Vec::new(), 1)
        .await;
    let too_large = service
        .create_call(&creator, CallType::Meeting, Vec::new(), 101)
        .await;

    assert!(matches!(too_small, Err(AppError::BadRequest(_))));
    assert!(matches!(too_large, Err(AppError::BadRequest(_))));

    Ok(())
}
