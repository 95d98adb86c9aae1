use super::*;

/// Tests applying the same preference change to several users at once.
///
/// Verifies that only the listed users change and that unspecified preferences keep
/// their stored values.
///
/// Expected: Ok(2), third user untouched
#[tokio::test]
async fn updates_listed_users_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;
    let third = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update_email_preferences_many(
            &[first.id, second.id],
            EmailPreferencesUpdate {
                new_posts: Some(false),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated, 2);

    let first = repo.find_by_id(first.id).await?.unwrap();
    assert!(!first.email_preferences.new_posts);
    assert!(first.email_preferences.comment_replies);

    let third = repo.find_by_id(third.id).await?.unwrap();
    assert!(third.email_preferences.new_posts);

    Ok(())
}

/// Tests that an update without any preference is a no-op.
///
/// Expected: Ok(0)
#[tokio::test]
async fn empty_update_changes_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update_email_preferences_many(&[user.id], EmailPreferencesUpdate::default())
        .await?;

    assert_eq!(updated, 0);

    Ok(())
}
