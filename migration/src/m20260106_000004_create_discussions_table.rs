use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Discussions::Table)
                    .if_not_exists()
                    .col(pk_auto(Discussions::Id))
                    .col(integer_null(Discussions::AnnouncementId))
                    .col(string(Discussions::SenderUsername))
                    .col(string(Discussions::RecipientUsername))
                    .col(
                        timestamp_with_time_zone(Discussions::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Discussions::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Discussions::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Discussions {
    Table,
    Id,
    AnnouncementId,
    SenderUsername,
    RecipientUsername,
    CreatedAt,
    UpdatedAt,
}
