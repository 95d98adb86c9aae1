use super::*;

/// Tests a partial category update.
///
/// Expected: description set, name and active flag unchanged
#[tokio::test]
async fn updates_description_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;

    let repo = CategoryRepository::new(db);
    let updated = repo
        .update(
            category.id,
            UpdateCategoryParams {
                description: Some("Everything about cells".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, category.name);
    assert_eq!(
        updated.description.as_deref(),
        Some("Everything about cells")
    );
    assert!(updated.is_active);

    Ok(())
}

/// Tests updating a category that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let result = repo.update(42, UpdateCategoryParams::default()).await?;

    assert!(result.is_none());

    Ok(())
}
