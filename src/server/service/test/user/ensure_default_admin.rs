use super::*;

fn admin_config() -> DefaultAdminConfig {
    DefaultAdminConfig {
        email: "admin@example.com".to_string(),
        name: "admin".to_string(),
        password: "bootstrap-password".to_string(),
    }
}

/// Tests the configured admin is created on an empty database.
///
/// Expected: Ok(Some(User)) with the admin role
#[tokio::test]
async fn creates_admin_when_missing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = UserService::new(db)
        .ensure_default_admin(&admin_config())
        .await?;

    let admin = created.expect("admin should be created");
    assert_eq!(admin.name, "admin");
    assert!(admin.is_admin());

    Ok(())
}

/// Tests nothing is created once any admin exists.
///
/// Expected: Ok(None)
#[tokio::test]
async fn skips_when_admin_exists() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_admin(db).await?;

    let created = UserService::new(db)
        .ensure_default_admin(&admin_config())
        .await?;

    assert!(created.is_none());

    Ok(())
}
