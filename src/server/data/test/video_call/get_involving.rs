use super::*;

/// Tests the membership filter covers creators, invitees and participants.
///
/// Verifies that a user sees the call they created, the private call listing them as an
/// invitee and the room they joined, but not a stranger's private call.
///
/// Expected: three calls, newest first
#[tokio::test]
async fn returns_calls_involving_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_video_call_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let ana = factory::create_user(db).await?;
    let ben = factory::create_user(db).await?;
    let eve = factory::create_user(db).await?;

    let created = factory::video_call::VideoCallFactory::new(db, &ana)
        .build()
        .await?;
    let invited = factory::video_call::VideoCallFactory::new(db, &ben)
        .private(vec![eve.id, ana.id])
        .build()
        .await?;
    let joined = factory::video_call::VideoCallFactory::new(db, &ben)
        .build()
        .await?;
    let unrelated = factory::video_call::VideoCallFactory::new(db, &ben)
        .private(vec![eve.id])
        .build()
        .await?;

    let repo = VideoCallRepository::new(db);
    repo.join(joined.id, ana.id, ana.name.clone(), Utc::now()).await?;

    let calls = repo.get_involving(ana.id, 50).await?;
    let ids: Vec<i32> = calls.iter().map(|call| call.id).collect();

    assert_eq!(ids, vec![joined.id, invited.id, created.id]);
    assert!(!ids.contains(&unrelated.id));
    assert_eq!(calls[0].participants.len(), 1);

    Ok(())
}

/// Tests the limit applies after filtering.
///
/// Expected: only the newest matching call
#[tokio::test]
async fn applies_limit_to_matching_calls() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_video_call_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let ana = factory::create_user(db).await?;
    let ben = factory::create_user(db).await?;

    factory::video_call::VideoCallFactory::new(db, &ana)
        .build()
        .await?;
    let newest = factory::video_call::VideoCallFactory::new(db, &ana)
        .build()
        .await?;
    factory::video_call::VideoCallFactory::new(db, &ben)
        .build()
        .await?;

    let calls = VideoCallRepository::new(db).get_involving(ana.id, 1).await?;

    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].id, newest.id);

    Ok(())
}

/// Tests history only returns ended calls the user created or took part in.
///
/// Expected: the ended call the user created; a call they were only invited to, the
/// active call they joined and a stranger's ended call are excluded
#[tokio::test]
async fn returns_ended_calls_created_or_joined() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_video_call_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let ana = factory::create_user(db).await?;
    let ben = factory::create_user(db).await?;

    let finished = factory::video_call::VideoCallFactory::new(db, &ana)
        .status("ended")
        .build()
        .await?;
    factory::video_call::VideoCallFactory::new(db, &ben)
        .private(vec![ana.id])
        .status("ended")
        .build()
        .await?;
    let ongoing = factory::video_call::VideoCallFactory::new(db, &ben)
        .build()
        .await?;
    factory::video_call::VideoCallFactory::new(db, &ben)
        .status("ended")
        .build()
        .await?;

    let repo = VideoCallRepository::new(db);
    repo.join(ongoing.id, ana.id, ana.name.clone(), Utc::now()).await?;

    let history = repo.get_ended_for(ana.id, 50).await?;

    assert_eq!(history.len(), 1);
    assert_eq!(history[0].id, finished.id);
    assert_eq!(history[0].status, CallStatus::Ended);

    Ok(())
}
