//! Ratings left by one user about another, stored under the historical `avis` table name.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "avis")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub author_username: String,
    pub recipient_username: String,
    pub note: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub commentaire: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
