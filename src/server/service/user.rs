//! User service for business logic.
//!
//! This module provides the `UserService` for account management: admin-driven user
//! CRUD, self-service profile updates, and the default administrator bootstrap. Name and
//! email uniqueness is enforced here before touching the database.

use sea_orm::DatabaseConnection;

use crate::server::{
    config::DefaultAdminConfig,
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParams, Role, UpdateUserParams, User},
    service::auth::{check_password_strength, hash_password},
    util::validate::{optional_max_length, require_length},
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a user account with a hashed password.
    ///
    /// # Arguments
    /// - `email` - Unique email address
    /// - `name` - Unique login name (1..50 characters)
    /// - `password` - Plain text password, at least 6 characters
    /// - `role` - Admin or normal user
    /// - `phone` - Optional phone number (at most 20 characters)
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::BadRequest)` - Invalid field or duplicate email/name
    pub async fn create(
        &self,
        email: &str,
        name: &str,
        password: &str,
        role: Role,
        phone: Option<String>,
    ) -> Result<User, AppError> {
        let email = normalize_email(email)?;
        require_length("name", name, 1, 50)?;
        optional_max_length("phone", phone.as_deref(), 20)?;
        check_password_strength(password)?;

        let repo = UserRepository::new(self.db);
        if repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::BadRequest("Email already registered".to_string()));
        }
        if repo.find_by_name(name.trim()).await?.is_some() {
            return Err(AppError::BadRequest("Name already taken".to_string()));
        }

        let user = repo
            .create(CreateUserParams {
                email,
                name: name.trim().to_string(),
                password_hash: hash_password(password)?,
                role,
                phone,
            })
            .await?;

        tracing::info!("Created {} user {}", user.role.as_str(), user.name);

        Ok(user)
    }

    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        Ok(UserRepository::new(self.db).get_all().await?)
    }

    /// # Returns
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn get(&self, id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Applies a partial update, re-checking email and name uniqueness against other users.
    ///
    /// # Returns
    /// - `Ok(User)` - Updated user
    /// - `Err(AppError::NotFound)` - No user with that id
    /// - `Err(AppError::BadRequest)` - Invalid field or duplicate email/name
    pub async fn update(&self, id: i32, mut params: UpdateUserParams) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        if let Some(email) = params.email.take() {
            let email = normalize_email(&email)?;
            if repo
                .find_by_email(&email)
                .await?
                .is_some_and(|other| other.id != id)
            {
                return Err(AppError::BadRequest("Email already registered".to_string()));
            }
            params.email = Some(email);
        }

        if let Some(name) = params.name.take() {
            require_length("name", &name, 1, 50)?;
            let name = name.trim().to_string();
            if repo
                .find_by_name(&name)
                .await?
                .is_some_and(|other| other.id != id)
            {
                return Err(AppError::BadRequest("Name already taken".to_string()));
            }
            params.name = Some(name);
        }

        optional_max_length("phone", params.phone.as_deref(), 20)?;

        repo.update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Deletes another user's account.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Admin tried to delete their own account
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn delete(&self, actor: &User, id: i32) -> Result<(), AppError> {
        if actor.id == id {
            return Err(AppError::BadRequest(
                "Cannot delete your own account".to_string(),
            ));
        }

        if UserRepository::new(self.db).delete(id).await? == 0 {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        tracing::info!("User {} deleted by {}", id, actor.name);

        Ok(())
    }

    /// Flips another user's active flag.
    ///
    /// # Returns
    /// - `Ok(User)` - User with the new flag
    /// - `Err(AppError::BadRequest)` - Admin tried to deactivate themselves
    pub async fn toggle_status(&self, actor: &User, id: i32) -> Result<User, AppError> {
        if actor.id == id {
            return Err(AppError::BadRequest(
                "Cannot change your own account status".to_string(),
            ));
        }

        let user = self.get(id).await?;
        let params = UpdateUserParams {
            is_active: Some(!user.is_active),
            ..Default::default()
        };

        UserRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Creates the configured administrator when no admin exists yet.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The admin was created
    /// - `Ok(None)` - An admin already exists
    pub async fn ensure_default_admin(
        &self,
        config: &DefaultAdminConfig,
    ) -> Result<Option<User>, AppError> {
        if UserRepository::new(self.db).admin_exists().await? {
            return Ok(None);
        }

        let admin = self
            .create(
                &config.email,
                &config.name,
                &config.password,
                Role::Admin,
                None,
            )
            .await?;

        tracing::info!("Default admin {} created", admin.name);

        Ok(Some(admin))
    }
}

/// Trims and lowercases an email, checking it looks like `local@domain`.
fn normalize_email(email: &str) -> Result<String, AppError> {
    let email = email.trim().to_lowercase();
    let valid = email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'))
        && !email.contains(char::is_whitespace);

    if !valid {
        return Err(AppError::BadRequest("Invalid email address".to_string()));
    }
    Ok(email)
}
