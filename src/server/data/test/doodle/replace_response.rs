use super::*;

/// Tests that a second response by the same user replaces the first.
///
/// Expected: one response holding the latest answers
#[tokio::test]
async fn replaces_earlier_response() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_doodle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let doodle = DoodleFactory::new(db, 1, "ana").build().await?;
    let repo = DoodleRepository::new(db);

    for answer in [Answer::Yes, Answer::No] {
        repo.replace_response(SubmitResponseParams {
            doodle_id: doodle.id,
            user_id: 2,
            username: "ben".to_string(),
            answers: BTreeMap::from([("opt-a".to_string(), answer)]),
            comment: None,
        })
        .await?;
    }

    let fetched = repo.find_by_id(doodle.id).await?.unwrap();
    assert_eq!(fetched.responses.len(), 1);
    assert_eq!(fetched.responses[0].answers.get("opt-a"), Some(&Answer::No));

    let stats = fetched.option_stats();
    assert_eq!(stats["opt-a"].no, 1);
    assert_eq!(stats["opt-a"].yes, 0);

    Ok(())
}
