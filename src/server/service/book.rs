use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr};

use crate::{
    model::{
        book::{BookDto, BookFieldsDto},
        catalog::CatalogKind,
    },
    server::{
        data::book::BookRepository,
        error::AppError,
        model::book::{Book, BookParams},
        service::catalog::{CatalogDocument, CatalogService},
    },
};

pub type BookService<'a> = CatalogService<'a, Book>;

#[async_trait]
impl CatalogDocument for Book {
    type Params = BookParams;
    type Dto = BookDto;
    type FieldsDto = BookFieldsDto;

    const KIND: CatalogKind = CatalogKind::Book;

    fn validate(fields: BookFieldsDto) -> Result<BookParams, AppError> {
        BookParams::from_dto(fields)
    }

    fn dto(self) -> BookDto {
        self.into_dto()
    }

    fn id(&self) -> i32 {
        self.id
    }

    async fn find_all(db: &DatabaseConnection) -> Result<Vec<Self>, DbErr> {
        BookRepository::new(db).get_all().await
    }

    async fn find_by_id(db: &DatabaseConnection, id: i32) -> Result<Option<Self>, DbErr> {
        BookRepository::new(db).get_by_id(id).await
    }

    async fn insert(db: &DatabaseConnection, params: BookParams) -> Result<Self, DbErr> {
        BookRepository::new(db).create(params).await
    }

    async fn replace(
        db: &DatabaseConnection,
        id: i32,
        params: BookParams,
    ) -> Result<Self, DbErr> {
        BookRepository::new(db).update(id, params).await
    }

    async fn remove(db: &DatabaseConnection, id: i32) -> Result<(), DbErr> {
        BookRepository::new(db).delete(id).await
    }
}
