use super::*;

/// Tests that deleting a post removes its comments too.
///
/// Expected: Ok(1), no comments left for the post, other post's comments kept
#[tokio::test]
async fn deletes_post_with_comments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, post) = factory::helpers::create_post_with_author(db).await?;
    let other = factory::create_post(db, &author).await?;
    let parent = factory::create_comment(db, post.id, &author).await?;
    factory::comment::CommentFactory::new(db, post.id, &author)
        .parent(parent.id)
        .build()
        .await?;
    factory::create_comment(db, other.id, &author).await?;

    let repo = PostRepository::new(db);
    let deleted = repo.delete(post.id).await?;

    assert_eq!(deleted, 1);
    assert!(repo.find_by_id(post.id).await?.is_none());

    let remaining = entity::prelude::Comment::find().all(db).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].post_id, other.id);

    Ok(())
}

/// Tests deleting a post that does not exist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_for_unknown_post() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PostRepository::new(db);

    assert_eq!(repo.delete(404).await?, 0);

    Ok(())
}
