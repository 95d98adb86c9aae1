use super::*;

/// Tests that a created post comes back with its category name resolved.
///
/// Expected: category_name equals the category's name
#[tokio::test]
async fn resolves_category_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let category = factory::category::CategoryFactory::new(db)
        .name("Cosmología")
        .build()
        .await?;

    let repo = PostRepository::new(db);
    let post = repo
        .create(CreatePostParams {
            title: "Dark matter".to_string(),
            content: "Where is it?".to_string(),
            category_id: Some(category.id),
            author_id: author.id,
            author_name: author.name.clone(),
        })
        .await?;

    assert_eq!(post.author_id, author.id);
    assert_eq!(post.category_name.as_deref(), Some("Cosmología"));

    let fetched = repo.find_by_id(post.id).await?.unwrap();
    assert_eq!(fetched.category_name.as_deref(), Some("Cosmología"));

    Ok(())
}
