use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Disc::Table)
                    .if_not_exists()
                    .col(pk_auto(Disc::Id))
                    .col(string(Disc::Title))
                    .col(boolean(Disc::Physical))
                    .col(boolean(Disc::Digital))
                    .col(string(Disc::Publisher))
                    .col(double_null(Disc::ListPrice))
                    .col(string_null(Disc::Image))
                    .col(string_null(Disc::Location))
                    .col(boolean(Disc::CheckedOut).default(false))
                    .col(string_null(Disc::CheckedOutBy))
                    .col(string_null(Disc::Series))
                    .col(json(Disc::Format))
                    .col(json(Disc::Languages))
                    .col(json(Disc::Subtitles))
                    .col(integer_null(Disc::Volume))
                    .col(string_null(Disc::Director))
                    .col(string_null(Disc::Studio))
                    .col(boolean(Disc::IsCollection))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Disc::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Disc {
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
    Format,
    Languages,
    Subtitles,
    Volume,
    Director,
    Studio,
    IsCollection,
}
