use super::*;

/// Tests toggling flips the active flag both ways.
///
/// Expected: inactive after the first toggle, active after the second
#[tokio::test]
async fn flips_active_flag() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = domain_user(factory::user::create_admin(db).await?);
    let target = factory::create_user(db).await?;
    let service = UserService::new(db);

    let toggled = service.toggle_status(&admin, target.id).await?;
    assert!(!toggled.is_active);

    let toggled = service.toggle_status(&admin, target.id).await?;
    assert!(toggled.is_active);

    Ok(())
}

/// Tests an admin cannot deactivate themselves.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn refuses_own_account() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = domain_user(factory::user::create_admin(db).await?);

    let result = UserService::new(db).toggle_status(&admin, admin.id).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
