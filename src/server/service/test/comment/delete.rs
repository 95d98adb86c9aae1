use super::*;

/// Tests the author deleting a comment removes its replies too.
///
/// Expected: Ok(()), no comments left on the post
#[tokio::test]
async fn deletes_comment_with_replies() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let post = factory::create_post(db, &author).await?;
    let parent = factory::create_comment(db, post.id, &author).await?;
    factory::comment::CommentFactory::new(db, post.id, &author)
        .parent(parent.id)
        .build()
        .await?;

    let service = CommentService::new(db);
    service.delete(&domain_user(author), parent.id).await?;

    assert!(service.get_by_post(post.id).await?.is_empty());

    Ok(())
}

/// Tests another regular user cannot delete the comment.
///
/// Expected: Err(AppError::Forbidden)
#[tokio::test]
async fn forbids_other_users() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let stranger = factory::create_user(db).await?;
    let post = factory::create_post(db, &author).await?;
    let comment = factory::create_comment(db, post.id, &author).await?;

    let result = CommentService::new(db)
        .delete(&domain_user(stranger), comment.id)
        .await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));

    Ok(())
}

/// Tests an admin may delete anyone's comment.
///
/// Expected: Ok(())
#[tokio::test]
async fn allows_admin() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let admin = factory::user::create_admin(db).await?;
    let post = factory::create_post(db, &author).await?;
    let comment = factory::create_comment(db, post.id, &author).await?;

    CommentService::new(db)
        .delete(&domain_user(admin), comment.id)
        .await?;

    Ok(())
}
