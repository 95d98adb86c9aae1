use super::*;

/// Tests a user deleting someone else's post.
///
/// Expected: Err(AppError::Forbidden) and the post kept
#[tokio::test]
async fn forbids_other_users() -> Result<(), AppError> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let other = domain_user(factory::create_user(db).await?);
    let post = factory::create_post(db, &author).await?;
    let service = PostService::new(db);

    let result = service.delete(&other, post.id).await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));
    assert!(service.get(post.id).await.is_ok());

    Ok(())
}

/// Tests the author deleting their post.
///
/// Expected: Ok; the post and its comments are gone
#[tokio::test]
async fn removes_post_and_comments() -> Result<(), AppError> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let reader = factory::create_user(db).await?;
    let post = factory::create_post(db, &author).await?;
    factory::create_comment(db, post.id, &reader).await?;
    let service = PostService::new(db);

    service.delete(&domain_user(author), post.id).await?;

    assert!(matches!(
        service.get(post.id).await,
        Err(AppError::NotFound(_))
    ));
    assert!(CommentRepository::new(db)
        .get_by_post(post.id)
        .await?
        .is_empty());

    Ok(())
}
