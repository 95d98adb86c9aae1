use super::*;

/// Tests creating a user with default notification preferences.
///
/// Verifies that new accounts start active, never seen, with email notifications on
/// (except the weekly digest) and Telegram notifications off.
///
/// Expected: Ok with default preferences
#[tokio::test]
async fn creates_user_with_default_preferences() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParams {
            email: "ana@example.com".to_string(),
            name: "ana".to_string(),
            password_hash: "hash".to_string(),
            role: Role::Normal,
            phone: None,
        })
        .await?;

    assert_eq!(user.name, "ana");
    assert_eq!(user.role, Role::Normal);
    assert!(user.is_active);
    assert!(user.last_seen.is_none());
    assert!(user.email_preferences.new_posts);
    assert!(!user.email_preferences.weekly_digest);
    assert!(!user.telegram_preferences.enabled);
    assert!(user.telegram_preferences.login_notifications);

    Ok(())
}

/// Tests that a duplicate email is rejected by the unique constraint.
///
/// Expected: Err
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParams {
            email: existing.email.clone(),
            name: "someone-else".to_string(),
            password_hash: "hash".to_string(),
            role: Role::Normal,
            phone: None,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
