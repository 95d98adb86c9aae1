use super::*;

/// Tests a name differing from an existing one only by case.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_duplicate_name_ignoring_case() -> Result<(), AppError> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::category::CategoryFactory::new(db)
        .name("Filosofía")
        .build()
        .await?;

    let result = CategoryService::new(db)
        .create(CreateCategoryParams {
            name: "  FILOSOFÍA ".to_string(),
            description: None,
            is_active: true,
        })
        .await;

    match result {
        Err(AppError::BadRequest(message)) => assert_eq!(message, "Category name already exists"),
        other => panic!("Expected BadRequest error, got: {:?}", other),
    }

    Ok(())
}

/// Tests creating a category trims its name.
///
/// Expected: Ok with the trimmed name
#[tokio::test]
async fn trims_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = CategoryService::new(db)
        .create(CreateCategoryParams {
            name: "  Biología ".to_string(),
            description: Some("Ciencias de la vida".to_string()),
            is_active: true,
        })
        .await?;

    assert_eq!(category.name, "Biología");

    Ok(())
}
