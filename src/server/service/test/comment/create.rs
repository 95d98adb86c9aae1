use super::*;

/// Tests replying to an existing comment.
///
/// Verifies that the parent is returned alongside the stored reply for notifications.
///
/// Expected: Ok(CreatedComment) with parent set
#[tokio::test]
async fn creates_reply() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let replier = factory::create_user(db).await?;
    let post = factory::create_post(db, &author).await?;
    let parent = factory::create_comment(db, post.id, &author).await?;

    let created = CommentService::new(db)
        .create(
            &domain_user(replier.clone()),
            post.id,
            "Agreed".to_string(),
            Some(parent.id),
        )
        .await?;

    assert_eq!(created.comment.parent_id, Some(parent.id));
    assert_eq!(created.comment.author_id, replier.id);
    assert_eq!(created.post.id, post.id);
    assert_eq!(created.parent.map(|p| p.id), Some(parent.id));

    Ok(())
}

/// Tests a reply whose parent belongs to another post.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_parent_from_other_post() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let post = factory::create_post(db, &author).await?;
    let other_post = factory::create_post(db, &author).await?;
    let foreign_parent = factory::create_comment(db, other_post.id, &author).await?;

    let result = CommentService::new(db)
        .create(
            &domain_user(author),
            post.id,
            "Reply".to_string(),
            Some(foreign_parent.id),
        )
        .await;

    match result {
        Err(AppError::BadRequest(message)) => assert!(message.contains("different post")),
        other => panic!("Expected BadRequest error, got: {:?}", other.map(|_| ())),
    }

    Ok(())
}

/// Tests commenting on a post that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_unknown_post() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = domain_user(factory::create_user(db).await?);

    let result = CommentService::new(db)
        .create(&author, 42, "Hello".to_string(), None)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests empty and oversized content.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_invalid_content() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let model = factory::create_user(db).await?;
    let post = factory::create_post(db, &model).await?;
    let author = domain_user(model);
    let service = CommentService::new(db);

    let empty = service.create(&author, post.id, "   ".to_string(), None).await;
    let too_long = service
        .create(&author, post.id, "x".repeat(1001), None)
        .await;

    assert!(matches!(empty, Err(AppError::BadRequest(_))));
    assert!(matches!(too_long, Err(AppError::BadRequest(_))));

    Ok(())
}
