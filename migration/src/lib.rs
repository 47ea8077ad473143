pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_users_table;
mod m20260105_000002_create_announcements_table;
mod m20260105_000003_create_applications_table;
mod m20260106_000004_create_discussions_table;
mod m20260106_000005_create_messages_table;
mod m20260107_000006_create_favorites_table;
mod m20260107_000007_create_avis_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_users_table::Migration),
            Box::new(m20260105_000002_create_announcements_table::Migration),
            Box::new(m20260105_000003_create_applications_table::Migration),
            Box::new(m20260106_000004_create_discussions_table::Migration),
            Box::new(m20260106_000005_create_messages_table::Migration),
            Box::new(m20260107_000006_create_favorites_table::Migration),
            Box::new(m20260107_000007_create_avis_table::Migration),
        ]
    }
}
