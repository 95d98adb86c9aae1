use super::*;

/// Tests that joining activates the call and is idempotent per user.
///
/// Expected: one participant, status active, started_at set once
#[tokio::test]
async fn activates_call_and_ignores_repeat_joins() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_video_call_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let call = factory::video_call::VideoCallFactory::new(db, &creator)
        .build()
        .await?;

    let repo = VideoCallRepository::new(db);
    repo.join(call.id, creator.id, creator.name.clone(), Utc::now())
        .await?;
    let first = repo.find_by_id(call.id).await?.unwrap();

    repo.join(call.id, creator.id, creator.name.clone(), Utc::now())
        .await?;
    let second = repo.find_by_id(call.id).await?.unwrap();

    assert_eq!(second.participants.len(), 1);
    assert_eq!(second.status, CallStatus::Active);
    assert!(first.started_at.is_some());
    assert_eq!(first.started_at, second.started_at);

    Ok(())
}
