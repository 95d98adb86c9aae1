use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    #[sea_orm(unique)]
    pub name: String,
    pub password_hash: String,
    pub role: String,
    pub is_active: bool,
    pub avatar: Option<String>,
    pub phone: Option<String>,
    pub email_new_posts: bool,
    pub email_admin_notifications: bool,
    pub email_comment_replies: bool,
    pub email_new_comments: bool,
    pub email_weekly_digest: bool,
    pub telegram_id: Option<String>,
    pub telegram_enabled: bool,
    pub telegram_login_notifications: bool,
    pub telegram_new_posts: bool,
    pub telegram_comment_replies: bool,
    pub telegram_admin_notifications: bool,
    pub last_seen: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::post::Entity")]
    Post,
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Post.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
