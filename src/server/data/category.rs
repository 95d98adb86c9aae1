//! Category data repository for database operations.
//!
//! This module provides the `CategoryRepository` for managing the topic categories that
//! posts and files are filed under.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::category::{Category, CreateCategoryParams, UpdateCategoryParams};

/// Repository providing database operations for category management.
pub struct CategoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryRepository<'a> {
    /// Creates a new CategoryRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `CategoryRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new category.
    ///
    /// # Arguments
    /// - `params` - Name, description and active flag
    ///
    /// # Returns
    /// - `Ok(Category)` - The created category
    /// - `Err(DbErr)` - Database error, including a unique violation on the name
    pub async fn create(&self, params: CreateCategoryParams) -> Result<Category, DbErr> {
        let now = Utc::now();
        let entity = entity::category::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            is_active: ActiveValue::Set(params.is_active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Category::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Category>, DbErr> {
        let entity = entity::prelude::Category::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Category::from_entity))
    }

    /// Finds a category whose name matches `name` ignoring case.
    ///
    /// # Arguments
    /// - `name` - Name to look for; surrounding whitespace is ignored
    /// - `exclude_id` - Category to skip, used when renaming
    ///
    /// # Returns
    /// - `Ok(Some(Category))` - A conflicting category
    /// - `Ok(None)` - The name is free
    pub async fn find_by_name_ignore_case(
        &self,
        name: &str,
        exclude_id: Option<i32>,
    ) -> Result<Option<Category>, DbErr> {
        let wanted = name.trim().to_lowercase();

        let found = entity::prelude::Category::find()
            .all(self.db)
            .await?
            .into_iter()
            .filter(|c| Some(c.id) != exclude_id)
            .find(|c| c.name.to_lowercase() == wanted);

        Ok(found.map(Category::from_entity))
    }

    /// Gets categories ordered by name.
    ///
    /// # Arguments
    /// - `active_only` - Skip deactivated categories
    pub async fn get_all(&self, active_only: bool) -> Result<Vec<Category>, DbErr> {
        let mut query = entity::prelude::Category::find();
        if active_only {
            query = query.filter(entity::category::Column::IsActive.eq(true));
        }

        let entities = query
            .order_by_asc(entity::category::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Category::from_entity).collect())
    }

    /// Applies a partial update to a category.
    ///
    /// # Returns
    /// - `Ok(Some(Category))` - The updated category
    /// - `Ok(None)` - No category with that id
    pub async fn update(
        &self,
        id: i32,
        params: UpdateCategoryParams,
    ) -> Result<Option<Category>, DbErr> {
        let Some(existing) = entity::prelude::Category::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(Some(description));
        }
        if let Some(is_active) = params.is_active {
            active.is_active = ActiveValue::Set(is_active);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;
        Ok(Some(Category::from_entity(updated)))
    }

    /// Counts posts filed under the category.
    pub async fn count_posts(&self, id: i32) -> Result<u64, DbErr> {
        entity::prelude::Post::find()
            .filter(entity::post::Column::CategoryId.eq(id))
            .count(self.db)
            .await
    }

    /// Deletes a category.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of deleted rows
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Category::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
