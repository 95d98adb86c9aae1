//! File factory for uploaded files and shared links.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts an uploaded file record owned by `uploader`.
pub async fn create_file(
    db: &DatabaseConnection,
    uploader: &entity::user::Model,
    category_id: Option<i32>,
) -> Result<entity::file::Model, DbErr> {
    let id = next_id();
    entity::file::ActiveModel {
        filename: ActiveValue::Set(format!("iskandar_community/file_{}", id)),
        original_name: ActiveValue::Set(format!("file_{}.pdf", id)),
        file_type: ActiveValue::Set("application/pdf".to_string()),
        file_size: ActiveValue::Set(1024),
        url: ActiveValue::Set(format!("https://cdn.example.com/file_{}.pdf", id)),
        uploaded_by: ActiveValue::Set(uploader.name.clone()),
        uploader_id: ActiveValue::Set(uploader.id),
        description: ActiveValue::Set(None),
        category_id: ActiveValue::Set(category_id),
        source_type: ActiveValue::Set("upload".to_string()),
        original_url: ActiveValue::Set(None),
        uploaded_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
