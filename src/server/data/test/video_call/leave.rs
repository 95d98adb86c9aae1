use super::*;

/// Tests that the call ends once the last participant leaves.
///
/// Expected: Ok(false) after the first leave, Ok(true) after the last
#[tokio::test]
async fn ends_call_when_last_participant_leaves() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_video_call_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let ana = factory::create_user(db).await?;
    let ben = factory::create_user(db).await?;
    let call = factory::video_call::VideoCallFactory::new(db, &ana)
        .build()
        .await?;

    let repo = VideoCallRepository::new(db);
    repo.join(call.id, ana.id, ana.name.clone(), Utc::now()).await?;
    repo.join(call.id, ben.id, ben.name.clone(), Utc::now()).await?;

    assert!(!repo.leave(call.id, ana.id, Utc::now()).await?);
    assert_eq!(
        repo.find_by_id(call.id).await?.unwrap().status,
        CallStatus::Active
    );

    assert!(repo.leave(call.id, ben.id, Utc::now()).await?);
    let ended = repo.find_by_id(call.id).await?.unwrap();
    assert_eq!(ended.status, CallStatus::Ended);
    assert!(ended.ended_at.is_some());
    assert!(ended.duration_seconds().is_some());

    Ok(())
}
