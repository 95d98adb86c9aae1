use super::*;

/// Tests a partial news update.
///
/// Expected: comment set, title and url unchanged
#[tokio::test]
async fn updates_comment_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::News)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let news = factory::news::create_news(db, &creator).await?;

    let repo = NewsRepository::new(db);
    let updated = repo
        .update(
            news.id,
            UpdateNewsParams {
                comment: Some("Worth reading".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.title, news.title);
    assert_eq!(updated.url, news.url);
    assert_eq!(updated.comment.as_deref(), Some("Worth reading"));

    Ok(())
}

/// Tests updating news that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_news() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::News)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = NewsRepository::new(db);
    let result = repo.update(1, UpdateNewsParams::default()).await?;

    assert!(result.is_none());

    Ok(())
}
