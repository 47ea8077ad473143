use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Avis::Table)
                    .if_not_exists()
                    .col(pk_auto(Avis::Id))
                    .col(string(Avis::AuthorUsername))
                    .col(string(Avis::RecipientUsername))
                    .col(integer(Avis::Note))
                    .col(text_null(Avis::Commentaire))
                    .col(
                        timestamp_with_time_zone(Avis::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Lookup path for "ratings received by" listings and summaries
        manager
            .create_index(
                Index::create()
                    .name("idx_avis_recipient_username")
                    .table(Avis::Table)
                    .col(Avis::RecipientUsername)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Avis::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Avis {
    Table,
    Id,
    AuthorUsername,
    RecipientUsername,
    Note,
    Commentaire,
    CreatedAt,
}
