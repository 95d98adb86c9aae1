use super::*;

/// Tests logging in with the right name and password.
///
/// Verifies that a token for the user is issued, presence is refreshed and the successful
/// attempt is written to the activity log.
///
/// Expected: Ok((User, token))
#[tokio::test]
async fn issues_token_for_valid_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::ActivityLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let model = factory::user::UserFactory::new(db)
        .name("alice")
        .password_hash(bcrypt::hash("correct horse", 4).unwrap())
        .build()
        .await?;
    let tokens = TokenService::new("test-secret");

    let (user, token) = AuthService::new(db, &tokens)
        .login("  alice ", "correct horse", &meta())
        .await?;

    assert_eq!(user.id, model.id);
    assert_eq!(tokens.verify(&token)?.user_id, model.id);

    let logs = ActivityLogRepository::new(db).find(login_filter("alice")).await?;
    assert_eq!(logs.len(), 1);
    assert!(logs[0].success);
    assert_eq!(logs[0].ip_address, "203.0.113.7");

    Ok(())
}

/// Tests a wrong password and an unknown name fail the same way.
///
/// Expected: Err(AuthError::InvalidCredentials) for both, each attempt logged as failed
#[tokio::test]
async fn rejects_invalid_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::ActivityLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .name("bob")
        .password_hash(bcrypt::hash("right-password", 4).unwrap())
        .build()
        .await?;
    let tokens = TokenService::new("test-secret");
    let service = AuthService::new(db, &tokens);

    let wrong_password = service.login("bob", "wrong-password", &meta()).await;
    let unknown_name = service.login("nobody", "right-password", &meta()).await;

    assert!(matches!(
        wrong_password,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));
    assert!(matches!(
        unknown_name,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    let logs = ActivityLogRepository::new(db).find(login_filter("bob")).await?;
    assert_eq!(logs.len(), 1);
    assert!(!logs[0].success);

    Ok(())
}

/// Tests a deactivated account cannot log in even with the right password.
///
/// Expected: Err(AuthError::AccountDeactivated)
#[tokio::test]
async fn rejects_deactivated_account() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::ActivityLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .name("carol")
        .password_hash(bcrypt::hash("secret1", 4).unwrap())
        .active(false)
        .build()
        .await?;
    let tokens = TokenService::new("test-secret");

    let result = AuthService::new(db, &tokens)
        .login("carol", "secret1", &meta())
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccountDeactivated(name))) => assert_eq!(name, "carol"),
        other => panic!("Expected AccountDeactivated error, got: {:?}", other.map(|_| ())),
    }

    Ok(())
}
