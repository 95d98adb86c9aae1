use super::*;

/// Tests listing expires overdue polls and hides private ones from other users.
///
/// Expected: overdue poll reported as expired, private poll only visible to its creator
#[tokio::test]
async fn expires_and_filters_polls() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_doodle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = domain_user(factory::create_user(db).await?);
    let viewer = domain_user(factory::create_user(db).await?);
    let service = DoodleService::new(db);

    let overdue = factory::doodle::DoodleFactory::new(db, owner.id, &owner.name)
        .deadline(Utc::now() - Duration::minutes(5))
        .build()
        .await?;
    let mut private = params(owner.id, vec![option("a", 1), option("b", 2)]);
    private.is_public = false;
    let private = service.create(private).await?;

    let seen_by_viewer = service.list(&viewer, None, false).await?;
    let seen_by_owner = service.list(&owner, None, false).await?;

    assert!(seen_by_viewer.iter().all(|d| d.id != private.id));
    assert!(seen_by_owner.iter().any(|d| d.id == private.id));

    let expired = seen_by_viewer
        .iter()
        .find(|d| d.id == overdue.id)
        .expect("overdue poll should be listed");
    assert_eq!(expired.status, DoodleStatus::Expired);

    let active_only = service
        .list(&owner, Some(DoodleStatus::Active), false)
        .await?;
    assert!(active_only.iter().all(|d| d.id != overdue.id));

    Ok(())
}
