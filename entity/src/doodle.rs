use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "doodle")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub creator_id: i32,
    pub creator_name: String,
    pub is_public: bool,
    pub deadline: Option<DateTimeUtc>,
    pub max_participants: Option<i32>,
    pub allow_comments: bool,
    pub allow_maybe: bool,
    pub status: String,
    pub final_option: Option<String>,
    pub created_at: DateTimeUtc,
    pub closed_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::doodle_option::Entity")]
    DoodleOption,
    #[sea_orm(has_many = "super::doodle_response::Entity")]
    DoodleResponse,
}

impl Related<super::doodle_option::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DoodleOption.def()
    }
}

impl Related<super::doodle_response::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DoodleResponse.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
