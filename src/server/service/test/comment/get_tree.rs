use super::*;

/// Tests replies are nested under their parent in creation order.
///
/// Expected: one root with two replies, oldest first
#[tokio::test]
async fn nests_replies() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let post = factory::create_post(db, &author).await?;
    let root = factory::comment::CommentFactory::new(db, post.id, &author)
        .offset_seconds(-30)
        .build()
        .await?;
    let first = factory::comment::CommentFactory::new(db, post.id, &author)
        .parent(root.id)
        .offset_seconds(-20)
        .build()
        .await?;
    let second = factory::comment::CommentFactory::new(db, post.id, &author)
        .parent(root.id)
        .offset_seconds(-10)
        .build()
        .await?;

    let tree = CommentService::new(db).get_tree(post.id).await?;

    assert_eq!(tree.len(), 1);
    assert_eq!(tree[0].comment.id, root.id);
    let reply_ids: Vec<i32> = tree[0].replies.iter().map(|r| r.comment.id).collect();
    assert_eq!(reply_ids, vec![first.id, second.id]);

    Ok(())
}
