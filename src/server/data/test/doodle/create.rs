use super::*;
use crate::server::model::doodle::{CreateDoodleParams, DoodleOption};
use chrono::{Duration, Utc};

/// Tests creating a poll keeps the option order.
///
/// Expected: active poll with options in submission order and no responses
#[tokio::test]
async fn creates_active_poll_with_ordered_options() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_doodle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let repo = DoodleRepository::new(db);
    let doodle = repo
        .create(CreateDoodleParams {
            title: "Book club".to_string(),
            description: None,
            creator_id: 1,
            creator_name: "ana".to_string(),
            options: vec![
                DoodleOption {
                    option_id: "tue".to_string(),
                    datetime: now + Duration::days(2),
                    label: "Tuesday".to_string(),
                },
                DoodleOption {
                    option_id: "mon".to_string(),
                    datetime: now + Duration::days(1),
                    label: "Monday".to_string(),
                },
            ],
            is_public: true,
            deadline: None,
            max_participants: None,
            allow_comments: true,
            allow_maybe: true,
        })
        .await?;

    assert_eq!(doodle.status, DoodleStatus::Active);
    assert!(doodle.responses.is_empty());

    let fetched = repo.find_by_id(doodle.id).await?.unwrap();
    let ids: Vec<&str> = fetched.options.iter().map(|o| o.option_id.as_str()).collect();
    assert_eq!(ids, vec!["tue", "mon"]);

    Ok(())
}
