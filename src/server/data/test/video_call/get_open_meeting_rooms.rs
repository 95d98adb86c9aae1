use super::*;

/// Tests that only waiting or active meeting rooms are listed.
///
/// Expected: the waiting room only; private and ended calls excluded
#[tokio::test]
async fn lists_open_meeting_rooms() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_video_call_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let open = factory::video_call::VideoCallFactory::new(db, &creator)
        .build()
        .await?;
    factory::video_call::VideoCallFactory::new(db, &creator)
        .status("ended")
        .build()
        .await?;
    factory::video_call::VideoCallFactory::new(db, &creator)
        .private(vec![creator.id])
        .build()
        .await?;

    let repo = VideoCallRepository::new(db);
    let rooms = repo.get_open_meeting_rooms().await?;

    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0].id, open.id);

    Ok(())
}
