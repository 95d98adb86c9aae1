use super::*;
use chrono::{Duration, Utc};

/// Tests listing users seen inside the presence window.
///
/// Verifies that recently seen active users are returned, while users seen too long
/// ago, never seen, or deactivated are not.
///
/// Expected: only the recent active user
#[tokio::test]
async fn returns_recently_seen_active_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let recent = factory::user::UserFactory::new(db)
        .last_seen(now - Duration::minutes(1))
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .last_seen(now - Duration::minutes(30))
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .last_seen(now - Duration::minutes(1))
        .active(false)
        .build()
        .await?;
    factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let online = repo.find_seen_since(now - Duration::minutes(5)).await?;

    assert_eq!(online.len(), 1);
    assert_eq!(online[0].id, recent.id);

    Ok(())
}

/// Tests that touching a user brings them into the window.
///
/// Expected: user listed after touch
#[tokio::test]
async fn touched_user_is_listed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let now = Utc::now();

    let repo = UserRepository::new(db);
    repo.touch_last_seen(user.id, now).await?;
    let online = repo.find_seen_since(now - Duration::minutes(5)).await?;

    assert_eq!(online.len(), 1);
    assert_eq!(online[0].id, user.id);

    Ok(())
}
