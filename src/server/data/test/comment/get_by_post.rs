use super::*;

/// Tests that a post's comments are returned oldest first.
///
/// Expected: comments ordered by created_at ascending, other posts excluded
#[tokio::test]
async fn returns_comments_in_chronological_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, post) = factory::helpers::create_post_with_author(db).await?;
    let other = factory::create_post(db, &author).await?;
    let later = factory::comment::CommentFactory::new(db, post.id, &author)
        .offset_seconds(60)
        .build()
        .await?;
    let earlier = factory::comment::CommentFactory::new(db, post.id, &author)
        .offset_seconds(-60)
        .build()
        .await?;
    factory::create_comment(db, other.id, &author).await?;

    let repo = CommentRepository::new(db);
    let ids: Vec<i32> = repo
        .get_by_post(post.id)
        .await?
        .into_iter()
        .map(|c| c.id)
        .collect();

    assert_eq!(ids, vec![earlier.id, later.id]);

    Ok(())
}
