//! Shared news links.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::news::NewsRepository,
    error::AppError,
    model::{
        news::{CreateNewsParams, News, UpdateNewsParams},
        user::User,
    },
    util::validate::{optional_max_length, require_http_url, require_length},
};

const MIN_URL_CHARS: usize = 10;

fn check_url(url: &str) -> Result<(), AppError> {
    require_http_url(url)?;
    if url.trim().chars().count() < MIN_URL_CHARS {
        return Err(AppError::BadRequest(format!(
            "url must be at least {} characters",
            MIN_URL_CHARS
        )));
    }
    Ok(())
}

pub struct NewsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NewsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, author: &User, params: CreateNewsParams) -> Result<News, AppError> {
        require_length("title", &params.title, 1, 500)?;
        check_url(&params.url)?;
        optional_max_length("comment", params.comment.as_deref(), 1000)?;

        let news = NewsRepository::new(self.db)
            .create(CreateNewsParams {
                title: params.title.trim().to_string(),
                url: params.url.trim().to_string(),
                created_by: author.id,
                created_by_name: author.name.clone(),
                ..params
            })
            .await?;

        Ok(news)
    }

    pub async fn get_all(&self) -> Result<Vec<News>, AppError> {
        Ok(NewsRepository::new(self.db).get_all().await?)
    }

    pub async fn get(&self, id: i32) -> Result<News, AppError> {
        NewsRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("News not found".to_string()))
    }

    /// Applies a partial update on behalf of `actor`.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - No fields given, or an invalid field
    /// - `Err(AppError::Forbidden)` - Actor is neither the creator nor an admin
    pub async fn update(
        &self,
        actor: &User,
        id: i32,
        params: UpdateNewsParams,
    ) -> Result<News, AppError> {
        let news = self.get(id).await?;
        check_owner(actor, &news, "update")?;

        if params.is_empty() {
            return Err(AppError::BadRequest("No fields to update".to_string()));
        }
        if let Some(title) = &params.title {
            require_length("title", title, 1, 500)?;
        }
        if let Some(url) = &params.url {
            check_url(url)?;
        }
        optional_max_length("comment", params.comment.as_deref(), 1000)?;

        NewsRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("News not found".to_string()))
    }

    pub async fn delete(&self, actor: &User, id: i32) -> Result<(), AppError> {
        let news = self.get(id).await?;
        check_owner(actor, &news, "delete")?;

        NewsRepository::new(self.db).delete(id).await?;

        Ok(())
    }
}

fn check_owner(actor: &User, news: &News, action: &str) -> Result<(), AppError> {
    if news.created_by == actor.id || actor.is_admin() {
        return Ok(());
    }
    Err(AppError::Forbidden(format!(
        "Not authorized to {} this news",
        action
    )))
}
