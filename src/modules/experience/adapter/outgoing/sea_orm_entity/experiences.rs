use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "experiences")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub company: String,
    pub duration: String,
    pub location: String,
    pub employment_type: String,
    pub order_index: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::responsibilities::Entity")]
    Responsibilities,
    #[sea_orm(has_many = "super::achievements::Entity")]
    Achievements,
    #[sea_orm(has_many = "super::experience_projects::Entity")]
    Projects,
    #[sea_orm(has_many = "super::experience_technologies::Entity")]
    Technologies,
}

impl Related<super::responsibilities::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Responsibilities.def()
    }
}

impl Related<super::achievements::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Achievements.def()
    }
}

impl Related<super::experience_projects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Projects.def()
    }
}

impl Related<super::experience_technologies::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Technologies.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
