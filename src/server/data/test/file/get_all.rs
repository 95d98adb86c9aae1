use super::*;

/// Tests listing files with and without a category filter.
///
/// Expected: newest first; filter returns only matching files
#[tokio::test]
async fn filters_by_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Category)
        .with_table(entity::prelude::File)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let uploader = factory::create_user(db).await?;
    let category = factory::create_category(db).await?;
    let first = factory::file::create_file(db, &uploader, Some(category.id)).await?;
    let second = factory::file::create_file(db, &uploader, None).await?;

    let repo = FileRepository::new(db);

    let all: Vec<i32> = repo.get_all(None).await?.into_iter().map(|f| f.id).collect();
    assert_eq!(all.len(), 2);
    assert!(all.contains(&first.id) && all.contains(&second.id));

    let filtered = repo.get_all(Some(category.id)).await?;
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, first.id);

    Ok(())
}
