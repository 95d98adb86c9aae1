use super::*;

/// Tests a private poll is hidden from everyone but its creator.
///
/// Verifies that another user can neither fetch nor answer the poll, while the creator
/// still can.
///
/// Expected: Err(AppError::NotFound) for the other user, Ok for the creator
#[tokio::test]
async fn hides_private_poll_from_other_users() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_doodle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = domain_user(factory::create_user(db).await?);
    let outsider = domain_user(factory::create_user(db).await?);
    let doodle = factory::doodle::DoodleFactory::new(db, owner.id, &owner.name)
        .private()
        .build()
        .await?;
    let service = DoodleService::new(db);

    let fetched = service.get(&outsider, doodle.id).await;
    let answered = service
        .respond(&outsider, doodle.id, answers(&[("opt-a", Answer::Yes)]), None)
        .await;

    assert!(matches!(fetched, Err(AppError::NotFound(_))));
    assert!(matches!(answered, Err(AppError::NotFound(_))));

    let own = service.get(&owner, doodle.id).await?;
    assert_eq!(own.id, doodle.id);
    assert!(own.responses.is_empty());

    Ok(())
}

/// Tests a public poll is visible to any user.
///
/// Expected: Ok with the poll's two options
#[tokio::test]
async fn returns_public_poll() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_doodle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = domain_user(factory::create_user(db).await?);
    let viewer = domain_user(factory::create_user(db).await?);
    let doodle = factory::doodle::DoodleFactory::new(db, owner.id, &owner.name)
        .build()
        .await?;

    let fetched = DoodleService::new(db).get(&viewer, doodle.id).await?;

    assert_eq!(fetched.options.len(), 2);
    assert_eq!(fetched.creator_id, owner.id);

    Ok(())
}
