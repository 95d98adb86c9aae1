use super::*;

/// Tests that a partial update only touches the provided fields.
///
/// Expected: name changed, email and role unchanged
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update(
            user.id,
            UpdateUserParams {
                name: Some("renamed".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "renamed");
    assert_eq!(updated.email, user.email);
    assert_eq!(updated.role, Role::Normal);
    assert!(updated.updated_at >= user.updated_at);

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo
        .update(
            999,
            UpdateUserParams {
                is_active: Some(false),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
