use super::*;

/// Tests bulk deletion by username with a per-user summary.
///
/// Expected: counts per listed user (zero for unknown users), other users kept
#[tokio::test]
async fn reports_deleted_entries_per_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ActivityLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    create_activity_log(db, "ana", "login", true, 0).await?;
    create_activity_log(db, "ana", "logout", true, 0).await?;
    create_activity_log(db, "ben", "login", false, 0).await?;
    create_activity_log(db, "carla", "login", true, 0).await?;

    let repo = ActivityLogRepository::new(db);
    let summary = repo
        .delete_by_usernames(&[
            "ana".to_string(),
            "ben".to_string(),
            "ghost".to_string(),
        ])
        .await?;

    assert_eq!(summary.get("ana"), Some(&2));
    assert_eq!(summary.get("ben"), Some(&1));
    assert_eq!(summary.get("ghost"), Some(&0));
    assert_eq!(repo.get_by_username("carla", 50).await?.len(), 1);

    Ok(())
}
