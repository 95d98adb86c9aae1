use super::*;

/// Tests other users' private polls are filtered before the limit applies.
///
/// Verifies that a newer private poll does not take the only slot of a one-poll page, and
/// that its creator still sees it.
///
/// Expected: the older public poll for the viewer, the private poll for its creator
#[tokio::test]
async fn filters_private_polls_before_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_doodle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let public = DoodleFactory::new(db, 1, "ana").build().await?;
    let private = DoodleFactory::new(db, 1, "ana").private().build().await?;
    let repo = DoodleRepository::new(db);

    let for_viewer = repo.get_all(2, None, None, 1).await?;
    let for_creator = repo.get_all(1, None, None, 1).await?;

    assert_eq!(for_viewer.len(), 1);
    assert_eq!(for_viewer[0].id, public.id);
    assert_eq!(for_creator.len(), 1);
    assert_eq!(for_creator[0].id, private.id);

    Ok(())
}

/// Tests the status and creator filters.
///
/// Expected: only the matching poll
#[tokio::test]
async fn filters_by_status_and_creator() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_doodle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mine = DoodleFactory::new(db, 1, "ana").build().await?;
    DoodleFactory::new(db, 2, "bob").build().await?;
    DoodleFactory::new(db, 1, "ana").status("closed").build().await?;

    let doodles = DoodleRepository::new(db)
        .get_all(1, Some(DoodleStatus::Active), Some(1), 100)
        .await?;

    assert_eq!(doodles.len(), 1);
    assert_eq!(doodles[0].id, mine.id);
    assert_eq!(doodles[0].options.len(), 2);

    Ok(())
}
