use super::*;

/// Tests the username filter as a case-insensitive substring match.
///
/// Expected: both "Ana" and "mariana" entries for "ANA", not "ben"
#[tokio::test]
async fn filters_username_by_substring() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ActivityLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    create_activity_log(db, "Ana", "login", true, 0).await?;
    create_activity_log(db, "mariana", "login", true, 0).await?;
    create_activity_log(db, "ben", "login", true, 0).await?;

    let repo = ActivityLogRepository::new(db);
    let logs = repo
        .find(ActivityLogFilter {
            username: Some("ANA".to_string()),
            limit: 100,
            ..Default::default()
        })
        .await?;

    assert_eq!(logs.len(), 2);
    assert!(logs.iter().all(|l| l.username != "ben"));

    Ok(())
}

/// Tests combining event type and success filters with newest-first ordering.
///
/// Expected: the two failed logins, most recent first
#[tokio::test]
async fn filters_failed_logins_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ActivityLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let old = create_activity_log(db, "ana", "login", false, 3).await?;
    let recent = create_activity_log(db, "ana", "login", false, 1).await?;
    create_activity_log(db, "ana", "login", true, 0).await?;
    create_activity_log(db, "ana", "logout", false, 0).await?;

    let repo = ActivityLogRepository::new(db);
    let ids: Vec<i32> = repo
        .find(ActivityLogFilter {
            event_type: Some(EventType::Login),
            success: Some(false),
            limit: 100,
            ..Default::default()
        })
        .await?
        .into_iter()
        .map(|l| l.id)
        .collect();

    assert_eq!(ids, vec![recent.id, old.id]);

    Ok(())
}

/// Tests limit and offset paging.
///
/// Expected: the second newest entry only
#[tokio::test]
async fn applies_limit_and_offset() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ActivityLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    create_activity_log(db, "ana", "login", true, 3).await?;
    let middle = create_activity_log(db, "ana", "login", true, 2).await?;
    create_activity_log(db, "ana", "login", true, 1).await?;

    let repo = ActivityLogRepository::new(db);
    let logs = repo
        .find(ActivityLogFilter {
            limit: 1,
            offset: 1,
            ..Default::default()
        })
        .await?;

    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].id, middle.id);

    Ok(())
}
