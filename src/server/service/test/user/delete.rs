use super::*;

/// Tests an admin deleting another user.
///
/// Expected: Ok(()), user gone afterwards
#[tokio::test]
async fn deletes_other_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = domain_user(factory::user::create_admin(db).await?);
    let target = factory::create_user(db).await?;
    let service = UserService::new(db);

    service.delete(&admin, target.id).await?;

    assert!(matches!(
        service.get(target.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests an admin cannot delete their own account.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn refuses_self_deletion() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = domain_user(factory::user::create_admin(db).await?);

    let result = UserService::new(db).delete(&admin, admin.id).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests deleting an id that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = domain_user(factory::user::create_admin(db).await?);

    let result = UserService::new(db).delete(&admin, 9999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
