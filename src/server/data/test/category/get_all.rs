use super::*;

/// Tests that the public listing hides inactive categories and sorts by name.
///
/// Expected: ["Alpha", "Beta"] when active only, three entries otherwise
#[tokio::test]
async fn filters_inactive_and_sorts_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::category::CategoryFactory::new(db)
        .name("Beta")
        .build()
        .await?;
    factory::category::CategoryFactory::new(db)
        .name("Alpha")
        .build()
        .await?;
    factory::category::CategoryFactory::new(db)
        .name("Archived")
        .active(false)
        .build()
        .await?;

    let repo = CategoryRepository::new(db);

    let active: Vec<String> = repo
        .get_all(true)
        .await?
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(active, vec!["Alpha", "Beta"]);

    let all = repo.get_all(false).await?;
    assert_eq!(all.len(), 3);

    Ok(())
}
