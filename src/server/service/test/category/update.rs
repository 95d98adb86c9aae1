use super::*;

/// Tests renaming onto another category's name.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_rename_to_existing_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::category::CategoryFactory::new(db)
        .name("Cosmología")
        .build()
        .await?;
    let other = factory::create_category(db).await?;

    let result = CategoryService::new(db)
        .update(
            other.id,
            UpdateCategoryParams {
                name: Some("cosmología".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests the duplicate check ignores the category being updated.
///
/// Expected: Ok with the recased name
#[tokio::test]
async fn allows_recasing_own_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::CategoryFactory::new(db)
        .name("filosofía")
        .build()
        .await?;

    let updated = CategoryService::new(db)
        .update(
            category.id,
            UpdateCategoryParams {
                name: Some("Filosofía".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.id, category.id);
    assert_eq!(updated.name, "Filosofía");

    Ok(())
}
