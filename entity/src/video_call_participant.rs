use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "video_call_participant")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub call_id: i32,
    pub user_id: i32,
    pub username: String,
    pub joined_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::video_call::Entity",
        from = "Column::CallId",
        to = "super::video_call::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    VideoCall,
}

impl Related<super::video_call::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VideoCall.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
