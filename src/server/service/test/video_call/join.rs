use super::*;

/// Tests joining a password protected room.
///
/// Verifies that a wrong or missing password is refused while the right password and the
/// creator (without a password) are let in.
///
/// Expected: Forbidden for wrong passwords, active call with both participants afterwards
#[tokio::test]
async fn checks_room_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_video_call_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = domain_user(factory::create_user(db).await?);
    let guest = domain_user(factory::create_user(db).await?);
    let service = VideoCallService::new(db);

    let room = service
        .create_meeting_room(&creator, room(Some("open sesame")))
        .await?;
    assert!(room.password_hash.is_some());

    let wrong = service.join(&guest, room.id, Some("guess")).await;
    let missing = service.join(&guest, room.id, None).await;
    assert!(matches!(wrong, Err(AppError::Forbidden(_))));
    assert!(matches!(missing, Err(AppError::Forbidden(_))));

    service.join(&creator, room.id, None).await?;
    let joined = service.join(&guest, room.id, Some("open sesame")).await?;

    assert_eq!(joined.status, CallStatus::Active);
    assert_eq!(joined.participants.len(), 2);

    Ok(())
}

/// Tests a private call only admits invited users.
///
/// Expected: Err(AppError::Forbidden)
#[tokio::test]
async fn forbids_uninvited_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_video_call_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let invited = factory::create_user(db).await?;
    let outsider = factory::create_user(db).await?;
    let call = factory::video_call::VideoCallFactory::new(db, &creator)
        .private(vec![invited.id])
        .build()
        .await?;
    let service = VideoCallService::new(db);

    let result = service.join(&domain_user(outsider), call.id, None).await;
    service.join(&domain_user(invited), call.id, None).await?;

    assert!(matches!(result, Err(AppError::Forbidden(_))));

    Ok(())
}

/// Tests a full room refuses newcomers but lets participants rejoin.
///
/// Expected: Err(AppError::BadRequest) for the third user
#[tokio::test]
async fn refuses_when_full() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_video_call_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = domain_user(factory::create_user(db).await?);
    let second = domain_user(factory::create_user(db).await?);
    let third = domain_user(factory::create_user(db).await?);
    let service = VideoCallService::new(db);

    let room = service.create_meeting_room(&first, room(None)).await?;
    service.join(&first, room.id, None).await?;
    service.join(&second, room.id, None).await?;

    let result = service.join(&third, room.id, None).await;
    service.join(&second, room.id, None).await?;

    match result {
        Err(AppError::BadRequest(message)) => assert_eq!(message, "Call is full"),
        other => panic!("Expected BadRequest error, got: {:?}", other),
    }

    Ok(())
}

/// Tests the call ends when the last participant leaves and cannot be rejoined.
///
/// Expected: Ended after leaving, Err(AppError::BadRequest) on rejoin
#[tokio::test]
async fn ended_call_cannot_be_joined() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_video_call_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = domain_user(factory::create_user(db).await?);
    let service = VideoCallService::new(db);

    let call = service
        .create_call(&creator, CallType::Private, Vec::new(), 2)
        .await?;
    service.join(&creator, call.id, None).await?;
    let left = service.leave(&creator, call.id).await?;

    assert_eq!(left.status, CallStatus::Ended);
    assert!(matches!(
        service.join(&creator, call.id, None).await,
        Err(AppError::BadRequest(_))
    ));

    Ok(())
}
