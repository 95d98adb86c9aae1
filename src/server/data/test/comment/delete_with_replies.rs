use super::*;

/// Tests that deleting a comment removes its whole reply subtree.
///
/// Builds root -> reply -> nested reply plus an unrelated sibling and deletes the root.
///
/// Expected: Ok(3), sibling kept
#[tokio::test]
async fn deletes_nested_replies() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, post) = factory::helpers::create_post_with_author(db).await?;
    let root = factory::create_comment(db, post.id, &author).await?;
    let reply = factory::comment::CommentFactory::new(db, post.id, &author)
        .parent(root.id)
        .build()
        .await?;
    factory::comment::CommentFactory::new(db, post.id, &author)
        .parent(reply.id)
        .build()
        .await?;
    let sibling = factory::create_comment(db, post.id, &author).await?;

    let repo = CommentRepository::new(db);
    let deleted = repo.delete_with_replies(root.id).await?;

    assert_eq!(deleted, 3);
    let remaining = repo.get_by_post(post.id).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, sibling.id);

    Ok(())
}

/// Tests deleting a comment that does not exist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_for_unknown_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CommentRepository::new(db);

    assert_eq!(repo.delete_with_replies(7).await?, 0);

    Ok(())
}
