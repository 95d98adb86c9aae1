use sea_orm::DatabaseConnection;

use crate::server::{
    data::category::CategoryRepository,
    error::AppError,
    model::category::{Category, CreateCategoryParams, UpdateCategoryParams},
    util::validate::{optional_max_length, require_length},
};

/// Categories seeded by `initialize_defaults`.
pub const DEFAULT_CATEGORIES: [(&str, &str); 7] = [
    (
        "IA, Informática y Tecnología",
        "Inteligencia artificial, programación, tecnología digital",
    ),
    (
        "Física y Matemáticas",
        "Ciencias exactas, física teórica y aplicada, matemáticas",
    ),
    ("Filosofía", "Filosofía, ética, pensamiento crítico"),
    (
        "Biología",
        "Ciencias de la vida, biología molecular, ecología",
    ),
    (
        "Ciencias de la Salud",
        "Medicina, salud pública, investigación médica",
    ),
    ("Cosmología", "Astronomía, cosmología, ciencias del espacio"),
    (
        "Lengua y Literatura",
        "Literatura, lingüística, análisis textual",
    ),
];

pub struct CategoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a category with a case-insensitively unique name
    pub async fn create(&self, mut params: CreateCategoryParams) -> Result<Category, AppError> {
        require_length("name", &params.name, 1, 100)?;
        optional_max_length("description", params.description.as_deref(), 500)?;
        params.name = params.name.trim().to_string();

        let repo = CategoryRepository::new(self.db);
        if repo
            .find_by_name_ignore_case(&params.name, None)
            .await?
            .is_some()
        {
            return Err(AppError::BadRequest(
                "Category name already exists".to_string(),
            ));
        }

        Ok(repo.create(params).await?)
    }

    /// Gets categories sorted by name, optionally only the active ones
    pub async fn get_all(&self, active_only: bool) -> Result<Vec<Category>, AppError> {
        Ok(CategoryRepository::new(self.db).get_all(active_only).await?)
    }

    pub async fn get(&self, id: i32) -> Result<Category, AppError> {
        CategoryRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Category not found".to_string()))
    }

    /// Updates a category; a rename must not collide with another category
    pub async fn update(
        &self,
        id: i32,
        mut params: UpdateCategoryParams,
    ) -> Result<Category, AppError> {
        let repo = CategoryRepository::new(self.db);

        if let Some(name) = params.name.take() {
            require_length("name", &name, 1, 100)?;
            if repo
                .find_by_name_ignore_case(&name, Some(id))
                .await?
                .is_some()
            {
                return Err(AppError::BadRequest(
                    "Category name already exists".to_string(),
                ));
            }
            params.name = Some(name.trim().to_string());
        }
        optional_max_length("description", params.description.as_deref(), 500)?;

        repo.update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("Category not found".to_string()))
    }

    /// Deletes a category nobody posts in
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = CategoryRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Category not found".to_string()));
        }

        let posts = repo.count_posts(id).await?;
        if posts > 0 {
            return Err(AppError::BadRequest(format!(
                "Cannot delete category: {} posts are using this category",
                posts
            )));
        }

        repo.delete(id).await?;

        Ok(())
    }

    /// Seeds the default categories, skipping names that already exist
    ///
    /// # Returns
    /// - `Ok(Vec<Category>)` - The categories created by this call
    pub async fn initialize_defaults(&self) -> Result<Vec<Category>, AppError> {
        let repo = CategoryRepository::new(self.db);
        let mut created = Vec::new();

        for (name, description) in DEFAULT_CATEGORIES {
            if repo.find_by_name_ignore_case(name, None).await?.is_some() {
                continue;
            }

            created.push(
                repo.create(CreateCategoryParams {
                    name: name.to_string(),
                    description: Some(description.to_string()),
                    is_active: true,
                })
                .await?,
            );
        }

        Ok(created)
    }
}
