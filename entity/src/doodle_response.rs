use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "doodle_response")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub doodle_id: i32,
    pub user_id: i32,
    pub username: String,
    /// Map of option id to `yes`, `no` or `maybe`.
    pub responses: Json,
    pub comment: Option<String>,
    pub responded_at: DateTimeUtc,
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
