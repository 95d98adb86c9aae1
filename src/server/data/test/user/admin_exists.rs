use super::*;

/// Tests detecting when admin users exist.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_when_admin_exists() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_admin(db).await?;

    let repo = UserRepository::new(db);
    assert!(repo.admin_exists().await?);

    Ok(())
}

/// Tests detecting when only regular users exist (first-time setup scenario).
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_with_only_regular_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;
    factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    assert!(!repo.admin_exists().await?);

    Ok(())
}

/// Tests that deactivated admins are excluded from notification recipients.
///
/// Expected: only the active admin is returned
#[tokio::test]
async fn get_admins_skips_inactive_admins() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let active = factory::user::create_admin(db).await?;
    factory::user::UserFactory::new(db)
        .admin(true)
        .active(false)
        .build()
        .await?;
    factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let admins = repo.get_admins().await?;

    assert_eq!(admins.len(), 1);
    assert_eq!(admins[0].id, active.id);

    Ok(())
}
