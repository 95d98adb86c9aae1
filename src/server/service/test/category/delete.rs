use super::*;

/// Tests deleting a category that posts still use.
///
/// Expected: Err(AppError::BadRequest) and the category kept
#[tokio::test]
async fn refuses_category_in_use() -> Result<(), AppError> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let category = factory::create_category(db).await?;
    factory::post::PostFactory::new(db, &author)
        .category_id(category.id)
        .build()
        .await?;
    let service = CategoryService::new(db);

    let result = service.delete(category.id).await;

    match result {
        Err(AppError::BadRequest(message)) => assert_eq!(
            message,
            "Cannot delete category: 1 posts are using this category"
        ),
        other => panic!("Expected BadRequest error, got: {:?}", other),
    }
    assert!(service.get(category.id).await.is_ok());

    Ok(())
}

/// Tests deleting an unused category.
///
/// Expected: Ok, then NotFound on lookup
#[tokio::test]
async fn deletes_unused_category() -> Result<(), AppError> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let service = CategoryService::new(db);

    service.delete(category.id).await?;

    assert!(matches!(
        service.get(category.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
