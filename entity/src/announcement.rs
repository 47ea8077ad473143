use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::AnnouncementStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "announcements")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub owner_username: String,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub city: String,
    pub start_date: Date,
    pub end_date: Date,
    pub remuneration: Option<i32>,
    pub status: AnnouncementStatus,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::application::Entity")]
    Application,
    #[sea_orm(has_many = "super::favorite::Entity")]
    Favorite,
}

impl Related<super::application::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Application.def()
    }
}

impl Related<super::favorite::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Favorite.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
