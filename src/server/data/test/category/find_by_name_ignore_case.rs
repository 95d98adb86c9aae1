use super::*;

/// Tests that name lookups ignore case and surrounding whitespace.
///
/// Expected: Ok(Some) for "  física y matemáticas "
#[tokio::test]
async fn matches_regardless_of_case() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let created = repo
        .create(CreateCategoryParams {
            name: "Física y Matemáticas".to_string(),
            description: None,
            is_active: true,
        })
        .await?;

    let found = repo
        .find_by_name_ignore_case("  física y matemáticas ", None)
        .await?;

    assert_eq!(found.map(|c| c.id), Some(created.id));

    Ok(())
}

/// Tests that the excluded category is ignored, so renaming to the same name is allowed.
///
/// Expected: Ok(None)
#[tokio::test]
async fn skips_excluded_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::CategoryFactory::new(db)
        .name("Biología")
        .build()
        .await?;

    let repo = CategoryRepository::new(db);
    let found = repo
        .find_by_name_ignore_case("BIOLOGÍA", Some(category.id))
        .await?;

    assert!(found.is_none());

    Ok(())
}
