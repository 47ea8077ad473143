//! SeaORM entities for every persisted table.

pub mod prelude;

pub mod announcement;
pub mod application;
pub mod avis;
pub mod discussion;
pub mod favorite;
pub mod message;
pub mod sea_orm_active_enums;
pub mod user;
