use super::*;

/// Tests publishing into an existing category.
///
/// Expected: Ok with the category name resolved
#[tokio::test]
async fn resolves_category_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let category = factory::category::CategoryFactory::new(db)
        .name("Cosmología")
        .build()
        .await?;

    let post = PostService::new(db)
        .create(params(&author, Some(category.id)))
        .await?;

    assert_eq!(post.author_id, author.id);
    assert_eq!(post.category_id, Some(category.id));
    assert_eq!(post.category_name.as_deref(), Some("Cosmología"));

    Ok(())
}

/// Tests publishing into a category that does not exist.
///
/// Expected: Err(AppError::BadRequest) and no post stored
#[tokio::test]
async fn rejects_unknown_category() -> Result<(), AppError> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let service = PostService::new(db);

    let result = service.create(params(&author, Some(9999))).await;

    match result {
        Err(AppError::BadRequest(message)) => assert_eq!(message, "Category not found"),
        other => panic!("Expected BadRequest error, got: {:?}", other),
    }
    assert!(service.get_all(None).await?.is_empty());

    Ok(())
}
