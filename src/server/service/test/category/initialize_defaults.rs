use super::*;

/// Tests seeding skips names that already exist in any case.
///
/// Verifies that a pre-existing lowercase "filosofía" is not duplicated and that a second
/// run creates nothing.
///
/// Expected: six categories created, then none
#[tokio::test]
async fn skips_existing_names() -> Result<(), AppError> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::category::CategoryFactory::new(db)
        .name("filosofía")
        .build()
        .await?;
    let service = CategoryService::new(db);

    let created = service.initialize_defaults().await?;
    let again = service.initialize_defaults().await?;

    assert_eq!(created.len(), DEFAULT_CATEGORIES.len() - 1);
    assert!(created.iter().all(|c| c.name != "Filosofía"));
    assert!(again.is_empty());
    assert_eq!(
        service.get_all(false).await?.len(),
        DEFAULT_CATEGORIES.len()
    );

    Ok(())
}
