use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Creator::Table)
                    .if_not_exists()
                    .col(pk_auto(Creator::Id))
                    .col(string(Creator::FirstName))
                    .col(string_null(Creator::MiddleInitials))
                    .col(string_null(Creator::LastName))
                    .col(json(Creator::Works))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Creator::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Creator {
    Table,
    Id,
    FirstName,
    MiddleInitials,
    LastName,
    Works,
}
