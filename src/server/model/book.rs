use sea_orm::DbErr;

use crate::{
    model::book::{BookDto, BookFieldsDto, BookType},
    server::{
        error::AppError,
        model::{
            item::ItemParams,
            validate::{one_of, optional_text, required, AUTHORS_REQUIRED, TYPE_REQUIRED},
        },
        util::json::from_json_list,
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub id: i32,
    pub item: ItemParams,
    pub authors: Vec<String>,
    pub language: Option<String>,
    pub book_type: BookType,
    pub volume: Option<i32>,
    pub isbn: Option<String>,
}

impl Book {
    pub fn into_dto(self) -> BookDto {
        BookDto {
            id: self.id,
            item: self.item.into_dto(),
            authors: self.authors,
            language: self.language,
            book_type: self.book_type,
            volume: self.volume,
            isbn: self.isbn,
        }
    }

    /// Converts an entity model to a book at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Book)` - The converted book
    /// - `Err(DbErr::Type)` - The stored type column holds an unknown book type
    pub fn from_entity(entity: entity::book::Model) -> Result<Self, DbErr> {
        let book_type = BookType::parse(&entity.book_type).ok_or_else(|| {
            DbErr::Type(format!(
                "Unknown book type '{}' stored for book {}",
                entity.book_type, entity.id
            ))
        })?;

        Ok(Self {
            id: entity.id,
            item: ItemParams {
                title: entity.title,
                physical: entity.physical,
                digital: entity.digital,
                publisher: entity.publisher,
                list_price: entity.list_price,
                image: entity.image,
                location: entity.location,
                checked_out: entity.checked_out,
                checked_out_by: entity.checked_out_by,
                series: entity.series,
            },
            authors: from_json_list(entity.authors),
            language: entity.language,
            book_type,
            volume: entity.volume,
            isbn: entity.isbn,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BookParams {
    pub item: ItemParams,
    pub authors: Vec<String>,
    pub language: Option<String>,
    pub book_type: BookType,
    pub volume: Option<i32>,
    pub isbn: Option<String>,
}

impl BookParams {
    pub fn from_dto(dto: BookFieldsDto) -> Result<Self, AppError> {
        let item = ItemParams::from_dto(dto.item)?;

        let authors = required(dto.authors.filter(|a| !a.is_empty()), AUTHORS_REQUIRED)?;
        let book_type = required(optional_text(dto.book_type), TYPE_REQUIRED)?;
        let book_type = one_of(&book_type, "Type", &BookType::ALL, BookType::as_str)?;

        Ok(Self {
            item,
            authors,
            language: optional_text(dto.language),
            book_type,
            volume: dto.volume,
            isbn: optional_text(dto.isbn),
        })
    }
}
