use super::*;

/// Tests storing a URL reference.
///
/// Expected: source type Url with size 0 and the original URL kept
#[tokio::test]
async fn stores_link_reference() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Category)
        .with_table(entity::prelude::File)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let uploader = factory::create_user(db).await?;

    let repo = FileRepository::new(db);
    let file = repo
        .create(CreateFileParams {
            filename: "Rust book".to_string(),
            original_name: "Rust book".to_string(),
            file_type: "link".to_string(),
            file_size: 0,
            url: "https://doc.rust-lang.org/book/".to_string(),
            uploaded_by: uploader.name.clone(),
            uploader_id: uploader.id,
            description: None,
            category_id: None,
            source_type: SourceType::Url,
            original_url: Some("https://doc.rust-lang.org/book/".to_string()),
        })
        .await?;

    assert_eq!(file.source_type, SourceType::Url);
    assert_eq!(file.file_size, 0);
    assert_eq!(
        repo.find_by_id(file.id).await?.unwrap().original_url.as_deref(),
        Some("https://doc.rust-lang.org/book/")
    );

    Ok(())
}
