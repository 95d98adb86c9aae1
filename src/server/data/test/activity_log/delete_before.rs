use super::*;
use chrono::{Duration, Utc};

/// Tests retention cleanup of entries older than the cutoff.
///
/// Expected: Ok(1), recent entry kept
#[tokio::test]
async fn deletes_entries_older_than_cutoff() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ActivityLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    create_activity_log(db, "ana", "login", true, 120).await?;
    create_activity_log(db, "ana", "login", true, 10).await?;

    let repo = ActivityLogRepository::new(db);
    let deleted = repo.delete_before(Utc::now() - Duration::days(90)).await?;

    assert_eq!(deleted, 1);
    assert_eq!(repo.get_by_username("ana", 50).await?.len(), 1);

    Ok(())
}
