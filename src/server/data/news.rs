//! News data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    QueryOrder,
};

use crate::server::model::news::{CreateNewsParams, News, UpdateNewsParams};

/// Repository providing database operations for shared news links.
pub struct NewsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NewsRepository<'a> {
    /// Creates a new NewsRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `NewsRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateNewsParams) -> Result<News, DbErr> {
        let now = Utc::now();
        let entity = entity::news::ActiveModel {
            title: ActiveValue::Set(params.title),
            url: ActiveValue::Set(params.url),
            comment: ActiveValue::Set(params.comment),
            created_by: ActiveValue::Set(params.created_by),
            created_by_name: ActiveValue::Set(params.created_by_name),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(News::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<News>, DbErr> {
        let entity = entity::prelude::News::find_by_id(id).one(self.db).await?;

        Ok(entity.map(News::from_entity))
    }

    /// Gets all news items newest first.
    pub async fn get_all(&self) -> Result<Vec<News>, DbErr> {
        let entities = entity::prelude::News::find()
            .order_by_desc(entity::news::Column::CreatedAt)
            .order_by_desc(entity::news::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(News::from_entity).collect())
    }

    /// Applies a partial update to a news item.
    ///
    /// # Returns
    /// - `Ok(Some(News))` - The updated item
    /// - `Ok(None)` - No item with that id
    pub async fn update(&self, id: i32, params: UpdateNewsParams) -> Result<Option<News>, DbErr> {
        let Some(existing) = entity::prelude::News::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        if let Some(title) = params.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(url) = params.url {
            active.url = ActiveValue::Set(url);
        }
        if let Some(comment) = params.comment {
            active.comment = ActiveValue::Set(Some(comment));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;
        Ok(Some(News::from_entity(updated)))
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::News::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected)
    }
}
