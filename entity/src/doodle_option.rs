use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "doodle_option")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub doodle_id: i32,
    pub option_id: String,
    pub datetime: DateTimeUtc,
    pub label: String,
    pub position: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::doodle::Entity",
        from = "Column::DoodleId",
        to = "super::doodle::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Doodle,
}

impl Related<super::doodle::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Doodle.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
