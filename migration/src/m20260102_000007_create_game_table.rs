use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Game::Table)
                    .if_not_exists()
                    .col(pk_auto(Game::Id))
                    .col(string(Game::Title))
                    .col(boolean(Game::Physical))
                    .col(boolean(Game::Digital))
                    .col(string(Game::Publisher))
                    .col(double_null(Game::ListPrice))
                    .col(string_null(Game::Image))
                    .col(string_null(Game::Location))
                    .col(boolean(Game::CheckedOut).default(false))
                    .col(string_null(Game::CheckedOutBy))
                    .col(string_null(Game::Series))
                    .col(json(Game::Platforms))
                    .col(json(Game::Languages))
                    .col(boolean(Game::Multiplayer))
                    .col(string_null(Game::Genre))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Game::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Game {
    Table,
    Id,
    Title,
    Physical,
    Digital,
    Publisher,
    ListPrice,
    Image,
    Location,
    CheckedOut,
    CheckedOutBy,
    Series,
    Platforms,
    Languages,
    Multiplayer,
    Genre,
}
