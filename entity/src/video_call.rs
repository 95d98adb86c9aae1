use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "video_call")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub channel_name: String,
    pub creator_id: i32,
    pub creator_name: String,
    pub call_type: String,
    pub room_name: Option<String>,
    pub description: Option<String>,
    /// JSON array of invited user ids.
    pub invited_users: Json,
    pub status: String,
    pub max_participants: i32,
    pub is_public: bool,
    pub password_hash: Option<String>,
    pub created_at: DateTimeUtc,
    pub started_at: Option<DateTimeUtc>,
    pub ended_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::video_call_participant::Entity")]
    VideoCallParticipant,
}

impl Related<super::video_call_participant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VideoCallParticipant.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
