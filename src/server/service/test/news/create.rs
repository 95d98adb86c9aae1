use super::*;

fn news(url: &str) -> CreateNewsParams {
    CreateNewsParams {
        title: "  Rust 2024 released ".to_string(),
        url: url.to_string(),
        comment: None,
        created_by: 0,
        created_by_name: String::new(),
    }
}

/// Tests authorship comes from the acting user.
///
/// Expected: Ok(News) with trimmed title and the actor as creator
#[tokio::test]
async fn records_author() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::News)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = domain_user(factory::create_user(db).await?);

    let created = NewsService::new(db)
        .create(&author, news("https://blog.rust-lang.org/"))
        .await?;

    assert_eq!(created.title, "Rust 2024 released");
    assert_eq!(created.created_by, author.id);
    assert_eq!(created.created_by_name, author.name);

    Ok(())
}

/// Tests non-http and too short URLs.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_invalid_url() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::News)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = domain_user(factory::create_user(db).await?);
    let service = NewsService::new(db);

    let ftp = service.create(&author, news("ftp://files.example.com")).await;
    let short = service.create(&author, news("http://ab")).await;

    assert!(matches!(ftp, Err(AppError::BadRequest(_))));
    assert!(matches!(short, Err(AppError::BadRequest(_))));

    Ok(())
}
