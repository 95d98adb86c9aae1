use super::*;

/// Tests creating a user normalizes the email and hashes the password.
///
/// Expected: Ok(User) with lowercase email and a bcrypt hash
#[tokio::test]
async fn creates_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserService::new(db)
        .create(" Dana@Example.COM ", "dana", "s3cret!", Role::Normal, None)
        .await?;

    assert_eq!(user.email, "dana@example.com");
    assert_eq!(user.role, Role::Normal);
    assert!(user.is_active);
    assert_ne!(user.password_hash, "s3cret!");

    Ok(())
}

/// Tests duplicate emails and names are refused.
///
/// Expected: Err(AppError::BadRequest) for each duplicate
#[tokio::test]
async fn rejects_duplicates() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("taken@example.com")
        .name("taken")
        .build()
        .await?;
    let service = UserService::new(db);

    let same_email = service
        .create("TAKEN@example.com", "other", "password", Role::Normal, None)
        .await;
    let same_name = service
        .create("free@example.com", "taken", "password", Role::Normal, None)
        .await;

    match same_email {
        Err(AppError::BadRequest(message)) => assert_eq!(message, "Email already registered"),
        other => panic!("Expected BadRequest error, got: {:?}", other),
    }
    match same_name {
        Err(AppError::BadRequest(message)) => assert_eq!(message, "Name already taken"),
        other => panic!("Expected BadRequest error, got: {:?}", other),
    }

    Ok(())
}

/// Tests malformed input is refused before touching the database.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_invalid_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);

    let bad_email = service
        .create("not-an-email", "eve", "password", Role::Normal, None)
        .await;
    let short_password = service
        .create("eve@example.com", "eve", "12345", Role::Normal, None)
        .await;

    assert!(matches!(bad_email, Err(AppError::BadRequest(_))));
    assert!(matches!(short_password, Err(AppError::BadRequest(_))));

    Ok(())
}
