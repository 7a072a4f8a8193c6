use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Book::Table)
                    .if_not_exists()
                    .col(pk_auto(Book::Id))
                    .col(string(Book::Title))
                    .col(boolean(Book::Physical))
                    .col(boolean(Book::Digital))
                    .col(string(Book::Publisher))
                    .col(double_null(Book::ListPrice))
                    .col(string_null(Book::Image))
                    .col(string_null(Book::Location))
                    .col(boolean(Book::CheckedOut).default(false))
                    .col(string_null(Book::CheckedOutBy))
                    .col(string_null(Book::Series))
                    .col(json(Book::Authors))
                    .col(string_null(Book::Language))
                    .col(string(Book::Type))
                    .col(integer_null(Book::Volume))
                    .col(string_null(Book::Isbn))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Book::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Book {
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
    Authors,
    Language,
    Type,
    Volume,
    Isbn,
}
