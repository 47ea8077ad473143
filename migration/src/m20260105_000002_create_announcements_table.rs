use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Announcements::Table)
                    .if_not_exists()
                    .col(pk_auto(Announcements::Id))
                    .col(string(Announcements::OwnerUsername))
                    .col(string(Announcements::Title))
                    .col(text(Announcements::Description))
                    .col(string(Announcements::City))
                    .col(date(Announcements::StartDate))
                    .col(date(Announcements::EndDate))
                    .col(integer_null(Announcements::Remuneration))
                    .col(string_len(Announcements::Status, 16).default("Open"))
                    .col(
                        timestamp_with_time_zone(Announcements::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Announcements::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_announcements_owner_username")
                    .table(Announcements::Table)
                    .col(Announcements::OwnerUsername)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Announcements::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Announcements {
    Table,
    Id,
    OwnerUsername,
    Title,
    Description,
    City,
    StartDate,
    EndDate,
    Remuneration,
    Status,
    CreatedAt,
    UpdatedAt,
}
