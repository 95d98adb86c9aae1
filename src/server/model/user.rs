//! User domain models and parameters.
//!
//! Users authenticate with name + password, carry a role, an active flag and two groups of
//! notification preferences (email and Telegram). The password hash lives on the domain model
//! for verification but never reaches a DTO.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::{
        notification::{UpdateEmailPreferencesDto, UserPreferencesDto},
        presence::OnlineUserDto,
        telegram::{TelegramConfigDto, UpdateTelegramPreferencesDto},
        user::{
            EmailPreferencesDto, RoleDto, TelegramPreferencesDto, UpdateProfileDto,
            UpdateUserDto, UserDto,
        },
    },
    server::util::parse::parse_stored,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Normal,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Normal => "normal",
        }
    }
}

impl FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "normal" => Ok(Self::Normal),
            _ => Err(()),
        }
    }
}

impl From<RoleDto> for Role {
    fn from(dto: RoleDto) -> Self {
        match dto {
            RoleDto::Admin => Self::Admin,
            RoleDto::Normal => Self::Normal,
        }
    }
}

impl From<Role> for RoleDto {
    fn from(role: Role) -> Self {
        match role {
            Role::Admin => Self::Admin,
            Role::Normal => Self::Normal,
        }
    }
}

/// Which emails a user wants to receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmailPreferences {
    pub new_posts: bool,
    pub admin_notifications: bool,
    pub comment_replies: bool,
    pub new_comments: bool,
    pub weekly_digest: bool,
}

impl Default for EmailPreferences {
    fn default() -> Self {
        Self {
            new_posts: true,
            admin_notifications: true,
            comment_replies: true,
            new_comments: true,
            weekly_digest: false,
        }
    }
}

impl EmailPreferences {
    pub fn into_dto(self) -> EmailPreferencesDto {
        EmailPreferencesDto {
            new_posts: self.new_posts,
            admin_notifications: self.admin_notifications,
            comment_replies: self.comment_replies,
            new_comments: self.new_comments,
            weekly_digest: self.weekly_digest,
        }
    }
}

/// Partial email preference update; `None` keeps the stored value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmailPreferencesUpdate {
    pub new_posts: Option<bool>,
    pub admin_notifications: Option<bool>,
    pub comment_replies: Option<bool>,
    pub new_comments: Option<bool>,
    pub weekly_digest: Option<bool>,
}

impl EmailPreferencesUpdate {
    pub fn from_dto(dto: UpdateEmailPreferencesDto) -> Self {
        Self {
            new_posts: dto.new_posts,
            admin_notifications: dto.admin_notifications,
            comment_replies: dto.comment_replies,
            new_comments: dto.new_comments,
            weekly_digest: dto.weekly_digest,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Which Telegram messages a user wants to receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TelegramPreferences {
    pub enabled: bool,
    pub login_notifications: bool,
    pub new_posts: bool,
    pub comment_replies: bool,
    pub admin_notifications: bool,
}

impl Default for TelegramPreferences {
    fn default() -> Self {
        Self {
            enabled: false,
            login_notifications: true,
            new_posts: true,
            comment_replies: true,
            admin_notifications: true,
        }
    }
}

impl TelegramPreferences {
    pub fn into_dto(self) -> TelegramPreferencesDto {
        TelegramPreferencesDto {
            enabled: self.enabled,
            login_notifications: self.login_notifications,
            new_posts: self.new_posts,
            comment_replies: self.comment_replies,
            admin_notifications: self.admin_notifications,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TelegramPreferencesUpdate {
    pub enabled: Option<bool>,
    pub login_notifications: Option<bool>,
    pub new_posts: Option<bool>,
    pub comment_replies: Option<bool>,
    pub admin_notifications: Option<bool>,
}

impl TelegramPreferencesUpdate {
    pub fn from_dto(dto: UpdateTelegramPreferencesDto) -> Self {
        Self {
            enabled: dto.enabled,
            login_notifications: dto.login_notifications,
            new_posts: dto.new_posts,
            comment_replies: dto.comment_replies,
            admin_notifications: dto.admin_notifications,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub role: Role,
    pub is_active: bool,
    pub avatar: Option<String>,
    pub phone: Option<String>,
    pub email_preferences: EmailPreferences,
    pub telegram_id: Option<String>,
    pub telegram_preferences: TelegramPreferences,
    pub last_seen: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(DbErr::Custom)` - The stored role is unknown
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, DbErr> {
        Ok(Self {
            role: parse_stored("role", &entity.role)?,
            id: entity.id,
            email: entity.email,
            name: entity.name,
            password_hash: entity.password_hash,
            is_active: entity.is_active,
            avatar: entity.avatar,
            phone: entity.phone,
            email_preferences: EmailPreferences {
                new_posts: entity.email_new_posts,
                admin_notifications: entity.email_admin_notifications,
                comment_replies: entity.email_comment_replies,
                new_comments: entity.email_new_comments,
                weekly_digest: entity.email_weekly_digest,
            },
            telegram_id: entity.telegram_id,
            telegram_preferences: TelegramPreferences {
                enabled: entity.telegram_enabled,
                login_notifications: entity.telegram_login_notifications,
                new_posts: entity.telegram_new_posts,
                comment_replies: entity.telegram_comment_replies,
                admin_notifications: entity.telegram_admin_notifications,
            },
            last_seen: entity.last_seen,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            name: self.name,
            role: self.role.into(),
            is_active: self.is_active,
            avatar: self.avatar,
            phone: self.phone,
            email_preferences: self.email_preferences.into_dto(),
            telegram_id: self.telegram_id,
            telegram_preferences: self.telegram_preferences.into_dto(),
            last_seen: self.last_seen,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn into_online_dto(self) -> OnlineUserDto {
        OnlineUserDto {
            id: self.id,
            name: self.name,
            avatar: self.avatar,
            last_seen: self.last_seen,
        }
    }

    pub fn into_preferences_dto(self) -> UserPreferencesDto {
        UserPreferencesDto {
            user_id: self.id,
            name: self.name,
            email: self.email,
            is_active: self.is_active,
            email_preferences: self.email_preferences.into_dto(),
        }
    }

    pub fn into_telegram_config_dto(self) -> TelegramConfigDto {
        TelegramConfigDto {
            telegram_id: self.telegram_id,
            preferences: self.telegram_preferences.into_dto(),
        }
    }
}

/// Parameters for inserting a user. The password is already hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub role: Role,
    pub phone: Option<String>,
}

/// Partial user update shared by the admin and self-service endpoints.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParams {
    pub email: Option<String>,
    pub name: Option<String>,
    pub role: Option<Role>,
    pub is_active: Option<bool>,
    pub phone: Option<String>,
    pub avatar: Option<String>,
}

impl UpdateUserParams {
    pub fn from_dto(dto: UpdateUserDto) -> Self {
        Self {
            email: dto.email,
            name: dto.name,
            role: dto.role.map(Role::from),
            is_active: dto.is_active,
            phone: dto.phone,
            avatar: dto.avatar,
        }
    }

    /// Profile updates never touch role or active flag.
    pub fn from_profile_dto(dto: UpdateProfileDto) -> Self {
        Self {
            email: dto.email,
            name: dto.name,
            phone: dto.phone,
            avatar: dto.avatar,
            ..Default::default()
        }
    }
}
