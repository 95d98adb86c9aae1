use super::*;
use chrono::Utc;

/// Tests closing a poll with a final option.
///
/// Expected: status closed, final option and closed_at set
#[tokio::test]
async fn closes_with_final_option() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_doodle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let doodle = DoodleFactory::new(db, 1, "ana").build().await?;

    let repo = DoodleRepository::new(db);
    let updated = repo.close(doodle.id, "opt-b".to_string(), Utc::now()).await?;

    assert_eq!(updated, 1);
    let fetched = repo.find_by_id(doodle.id).await?.unwrap();
    assert_eq!(fetched.status, DoodleStatus::Closed);
    assert_eq!(fetched.final_option.as_deref(), Some("opt-b"));
    assert!(fetched.closed_at.is_some());

    Ok(())
}

/// Tests that deleting a poll removes it along with its children.
///
/// Expected: poll gone
#[tokio::test]
async fn delete_removes_poll() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_doodle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let doodle = DoodleFactory::new(db, 1, "ana").build().await?;

    let repo = DoodleRepository::new(db);

    assert_eq!(repo.delete(doodle.id).await?, 1);
    assert!(repo.find_by_id(doodle.id).await?.is_none());

    Ok(())
}
