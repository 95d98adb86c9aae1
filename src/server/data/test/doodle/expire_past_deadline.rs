use super::*;
use chrono::{Duration, Utc};

/// Tests that only active polls past their deadline expire.
///
/// Expected: Ok(1); future and closed polls unchanged
#[tokio::test]
async fn expires_only_overdue_active_polls() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_doodle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let overdue = DoodleFactory::new(db, 1, "ana")
        .deadline(now - Duration::hours(1))
        .build()
        .await?;
    let upcoming = DoodleFactory::new(db, 1, "ana")
        .deadline(now + Duration::hours(1))
        .build()
        .await?;
    let closed = DoodleFactory::new(db, 1, "ana")
        .deadline(now - Duration::hours(1))
        .status("closed")
        .build()
        .await?;

    let repo = DoodleRepository::new(db);
    let expired = repo.expire_past_deadline(now).await?;

    assert_eq!(expired, 1);
    assert_eq!(
        repo.find_by_id(overdue.id).await?.unwrap().status,
        DoodleStatus::Expired
    );
    assert_eq!(
        repo.find_by_id(upcoming.id).await?.unwrap().status,
        DoodleStatus::Active
    );
    assert_eq!(
        repo.find_by_id(closed.id).await?.unwrap().status,
        DoodleStatus::Closed
    );

    Ok(())
}
