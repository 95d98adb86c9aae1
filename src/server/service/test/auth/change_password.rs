use super::*;

/// Tests changing the password with the correct current password.
///
/// Expected: Ok(()), new password verifies against the stored hash
#[tokio::test]
async fn replaces_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::ActivityLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let model = factory::user::UserFactory::new(db)
        .password_hash(hash_password("old-password")?)
        .build()
        .await?;
    let user = domain_user(model);
    let tokens = TokenService::new("test-secret");

    AuthService::new(db, &tokens)
        .change_password(&user, "old-password", "new-password", &meta())
        .await?;

    let stored = crate::server::data::user::UserRepository::new(db)
        .find_by_id(user.id)
        .await?
        .unwrap();
    assert!(verify_password("new-password", &stored.password_hash));
    assert!(!verify_password("old-password", &stored.password_hash));

    Ok(())
}

/// Tests the current password must match.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_wrong_current_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::ActivityLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let model = factory::user::UserFactory::new(db)
        .password_hash(bcrypt::hash("old-password", 4).unwrap())
        .build()
        .await?;
    let user = domain_user(model);
    let tokens = TokenService::new("test-secret");

    let result = AuthService::new(db, &tokens)
        .change_password(&user, "not-it", "new-password", &meta())
        .await;

    match result {
        Err(AppError::BadRequest(message)) => assert!(message.contains("incorrect")),
        other => panic!("Expected BadRequest error, got: {:?}", other),
    }

    Ok(())
}

/// Tests a new password shorter than six characters is refused.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_short_new_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::ActivityLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let model = factory::user::UserFactory::new(db)
        .password_hash(bcrypt::hash("old-password", 4).unwrap())
        .build()
        .await?;
    let user = domain_user(model);
    let tokens = TokenService::new("test-secret");

    let result = AuthService::new(db, &tokens)
        .change_password(&user, "old-password", "abc", &meta())
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
