use super::*;

/// Tests creating a poll with two options.
///
/// Expected: Ok(Doodle) active with both options in order
#[tokio::test]
async fn creates_active_poll() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_doodle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let doodle = DoodleService::new(db)
        .create(params(1, vec![option("a", 1), option("b", 2)]))
        .await?;

    assert_eq!(doodle.status, DoodleStatus::Active);
    let ids: Vec<&str> = doodle.options.iter().map(|o| o.option_id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);
    assert!(doodle.responses.is_empty());

    Ok(())
}

/// Tests the option count bounds and duplicate ids.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_invalid_options() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_doodle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = DoodleService::new(db);

    let single = service.create(params(1, vec![option("a", 1)])).await;
    let duplicate = service
        .create(params(1, vec![option("a", 1), option("a", 2)]))
        .await;
    let too_many = service
        .create(params(
            1,
            (0..21).map(|i| option(&format!("o{}", i), i)).collect(),
        ))
        .await;

    assert!(matches!(single, Err(AppError::BadRequest(_))));
    match duplicate {
        Err(AppError::BadRequest(message)) => assert_eq!(message, "Duplicate option ID: a"),
        other => panic!("Expected BadRequest error, got: {:?}", other),
    }
    assert!(matches!(too_many, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests titles shorter than three characters.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_short_title() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_doodle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut create = params(1, vec![option("a", 1), option("b", 2)]);
    create.title = "ab".to_string();

    let result = DoodleService::new(db).create(create).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
