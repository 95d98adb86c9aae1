use super::*;

/// Tests counting the posts that reference a category before deletion.
///
/// Expected: 2 for the used category, 0 for the unused one
#[tokio::test]
async fn counts_referencing_posts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let used = factory::create_category(db).await?;
    let unused = factory::create_category(db).await?;
    for _ in 0..2 {
        factory::post::PostFactory::new(db, &author)
            .category_id(used.id)
            .build()
            .await?;
    }
    factory::create_post(db, &author).await?;

    let repo = CategoryRepository::new(db);

    assert_eq!(repo.count_posts(used.id).await?, 2);
    assert_eq!(repo.count_posts(unused.id).await?, 0);

    Ok(())
}
