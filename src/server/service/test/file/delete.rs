use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

use super::*;

/// Tests a user deleting somebody else's file.
///
/// Expected: Err(AppError::Forbidden) and the file kept
#[tokio::test]
async fn forbids_other_users() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Category)
        .with_table(entity::prelude::File)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"result": "ok"})))
        .expect(0)
        .mount(&server)
        .await;
    let storage = storage(&server.uri());

    let uploader = factory::create_user(db).await?;
    let other = domain_user(factory::create_user(db).await?);
    let file = factory::file::create_file(db, &uploader, None).await?;
    let service = FileService::new(db, &storage);

    let result = service.delete(&other, file.id).await;

    match result {
        Err(AppError::Forbidden(message)) => {
            assert_eq!(message, "Not authorized to delete this file")
        }
        other => panic!("Expected Forbidden error, got: {:?}", other),
    }
    assert!(service.get(file.id).await.is_ok());

    Ok(())
}

/// Tests the uploader deleting their own shared link.
///
/// Expected: Ok without touching storage
#[tokio::test]
async fn allows_uploader() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Category)
        .with_table(entity::prelude::File)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let storage = CloudinaryClient::with_base_url(reqwest::Client::new(), "http://127.0.0.1:9", None);
    let uploader = domain_user(factory::create_user(db).await?);
    let service = FileService::new(db, &storage);
    let link = service
        .create_link(
            &uploader,
            Link {
                url: "https://example.com/paper.pdf".to_string(),
                title: "Paper".to_string(),
                description: None,
                category_id: None,
            },
        )
        .await?;

    service.delete(&uploader, link.id).await?;

    assert!(matches!(
        service.get(link.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests an admin deleting another user's upload.
///
/// Expected: Ok with the stored asset destroyed
#[tokio::test]
async fn allows_admin() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Category)
        .with_table(entity::prelude::File)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/demo/raw/destroy"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"result": "ok"})))
        .expect(1)
        .mount(&server)
        .await;
    let storage = storage(&server.uri());

    let uploader = factory::create_user(db).await?;
    let admin = domain_user(factory::user::create_admin(db).await?);
    let file = factory::file::create_file(db, &uploader, None).await?;
    let service = FileService::new(db, &storage);

    service.delete(&admin, file.id).await?;

    assert!(service.get_all(None).await?.is_empty());

    Ok(())
}
