use super::*;

/// Tests an authenticated admin passes the admin check.
///
/// Verifies that the guard resolves the token's user and refreshes their presence.
///
/// Expected: Ok(User) with last_seen set
#[tokio::test]
async fn allows_admin_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_admin(db).await?;
    let tokens = TokenService::new(SECRET);
    let token = tokens.issue(&load_user(db, admin.id).await)?;
    let headers = headers_with_token(&token);

    let user = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    assert_eq!(user.id, admin.id);
    assert!(user.last_seen.is_some());
    assert!(load_user(db, admin.id).await.last_seen.is_some());

    Ok(())
}

/// Tests a regular user passes when no permission is required.
///
/// Expected: Ok(User)
#[tokio::test]
async fn allows_any_active_user_without_permissions() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let tokens = TokenService::new(SECRET);
    let token = tokens.issue(&load_user(db, user.id).await)?;
    let headers = headers_with_token(&token);

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await?;

    assert_eq!(result.id, user.id);

    Ok(())
}

/// Tests a regular user is denied admin permission.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_non_admin_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let tokens = TokenService::new(SECRET);
    let token = tokens.issue(&load_user(db, user.id).await)?;
    let headers = headers_with_token(&token);

    let result = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::Admin])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, message))) => {
            assert_eq!(user_id, user.id);
            assert!(message.contains("admin"));
        }
        other => panic!("Expected AccessDenied error, got: {:?}", other),
    }

    Ok(())
}

/// Tests a request without an Authorization header is rejected.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn denies_access_when_not_authenticated() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tokens = TokenService::new(SECRET);
    let headers = HeaderMap::new();

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));

    Ok(())
}

/// Tests a token signed with another secret is rejected.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_token_with_wrong_signature() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let token = TokenService::new("other-secret").issue(&load_user(db, user.id).await)?;
    let tokens = TokenService::new(SECRET);
    let headers = headers_with_token(&token);

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));

    Ok(())
}

/// Tests a valid token for a deactivated account is rejected.
///
/// Verifies that deactivation takes effect even though the token itself is still valid.
///
/// Expected: Err(AuthError::UserNotFoundOrInactive)
#[tokio::test]
async fn denies_inactive_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .active(false)
        .build()
        .await?;
    let tokens = TokenService::new(SECRET);
    let token = tokens.issue(&load_user(db, user.id).await)?;
    let headers = headers_with_token(&token);

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    match result {
        Err(AppError::AuthErr(AuthError::UserNotFoundOrInactive(id))) => {
            assert_eq!(id, user.id)
        }
        other => panic!("Expected UserNotFoundOrInactive error, got: {:?}", other),
    }

    Ok(())
}

/// Tests a valid token whose user was deleted is rejected.
///
/// Expected: Err(AuthError::UserNotFoundOrInactive)
#[tokio::test]
async fn denies_deleted_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let tokens = TokenService::new(SECRET);
    let token = tokens.issue(&load_user(db, user.id).await)?;
    UserRepository::new(db).delete(user.id).await?;
    let headers = headers_with_token(&token);

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotFoundOrInactive(_)))
    ));

    Ok(())
}
