use super::*;

/// Tests a user editing someone else's post.
///
/// Expected: Err(AppError::Forbidden) and the post unchanged
#[tokio::test]
async fn forbids_other_users() -> Result<(), AppError> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let other = domain_user(factory::create_user(db).await?);
    let post = factory::create_post(db, &author).await?;
    let service = PostService::new(db);

    let result = service
        .update(
            &other,
            post.id,
            UpdatePostParams {
                title: Some("Hijacked".to_string()),
                ..Default::default()
            },
        )
        .await;

    match result {
        Err(AppError::Forbidden(message)) => {
            assert_eq!(message, "Not authorized to update this post")
        }
        other => panic!("Expected Forbidden error, got: {:?}", other),
    }
    assert_eq!(service.get(post.id).await?.title, post.title);

    Ok(())
}

/// Tests an admin editing another user's post.
///
/// Expected: Ok with the new title
#[tokio::test]
async fn allows_admin() -> Result<(), AppError> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let admin = domain_user(factory::user::create_admin(db).await?);
    let post = factory::create_post(db, &author).await?;

    let updated = PostService::new(db)
        .update(
            &admin,
            post.id,
            UpdatePostParams {
                title: Some("Moderated".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.title, "Moderated");
    assert_eq!(updated.author_id, author.id);

    Ok(())
}
