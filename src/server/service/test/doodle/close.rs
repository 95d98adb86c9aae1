use super::*;

/// Tests the creator closing a poll with a valid option.
///
/// Expected: Ok(Doodle) closed with the final option recorded
#[tokio::test]
async fn closes_with_final_option() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_doodle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let model = factory::create_user(db).await?;
    let doodle = factory::doodle::DoodleFactory::new(db, model.id, &model.name)
        .build()
        .await?;

    let closed = DoodleService::new(db)
        .close(&domain_user(model), doodle.id, "opt-b")
        .await?;

    assert_eq!(closed.status, DoodleStatus::Closed);
    assert_eq!(closed.final_option.as_deref(), Some("opt-b"));
    assert!(closed.closed_at.is_some());

    Ok(())
}

/// Tests only the creator may close the poll.
///
/// Expected: Err(AppError::Forbidden)
#[tokio::test]
async fn forbids_non_creator() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_doodle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let doodle = factory::doodle::DoodleFactory::new(db, creator.id, &creator.name)
        .build()
        .await?;

    let result = DoodleService::new(db)
        .close(&domain_user(other), doodle.id, "opt-a")
        .await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));

    Ok(())
}

/// Tests closing with an option the poll does not have.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_unknown_option() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_doodle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let model = factory::create_user(db).await?;
    let doodle = factory::doodle::DoodleFactory::new(db, model.id, &model.name)
        .build()
        .await?;

    let result = DoodleService::new(db)
        .close(&domain_user(model), doodle.id, "opt-x")
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
