use super::*;
use chrono::{Duration, Utc};

/// Tests listing posts newest first with an optional category filter.
///
/// Expected: newest post first; filter returns only the categorized post
#[tokio::test]
async fn lists_newest_first_and_filters_by_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let category = factory::create_category(db).await?;
    let older = factory::post::PostFactory::new(db, &author)
        .created_at(Utc::now() - Duration::hours(1))
        .category_id(category.id)
        .build()
        .await?;
    let newer = factory::create_post(db, &author).await?;

    let repo = PostRepository::new(db);

    let all: Vec<i32> = repo.get_all(None).await?.into_iter().map(|p| p.id).collect();
    assert_eq!(all, vec![newer.id, older.id]);

    let filtered = repo.get_all(Some(category.id)).await?;
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, older.id);
    assert_eq!(filtered[0].category_name.as_deref(), Some(category.name.as_str()));

    Ok(())
}
