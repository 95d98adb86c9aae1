use super::*;

/// Tests another user cannot edit the news item.
///
/// Expected: Err(AppError::Forbidden)
#[tokio::test]
async fn forbids_other_users() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::News)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let other = domain_user(factory::create_user(db).await?);
    let news = factory::news::create_news(db, &creator).await?;

    let result = NewsService::new(db)
        .update(
            &other,
            news.id,
            UpdateNewsParams {
                title: Some("Hijacked".to_string()),
                ..Default::default()
            },
        )
        .await;

    match result {
        Err(AppError::Forbidden(message)) => {
            assert_eq!(message, "Not authorized to update this news")
        }
        other => panic!("Expected Forbidden error, got: {:?}", other),
    }

    Ok(())
}

/// Tests an update without any field.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_empty_update() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::News)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let news = factory::news::create_news(db, &creator).await?;

    let result = NewsService::new(db)
        .update(&domain_user(creator), news.id, UpdateNewsParams::default())
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests an admin may edit someone else's news.
///
/// Expected: Ok(News) with the new title
#[tokio::test]
async fn allows_admin() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::News)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let admin = domain_user(factory::user::create_admin(db).await?);
    let news = factory::news::create_news(db, &creator).await?;

    let updated = NewsService::new(db)
        .update(
            &admin,
            news.id,
            UpdateNewsParams {
                title: Some("Edited".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.title, "Edited");

    Ok(())
}
