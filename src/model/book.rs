use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

use crate::model::{
    catalog::Identified,
    item::{CatalogItem, ItemDto, ItemFieldsDto},
};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub enum BookType {
    Manga,
    Comic,
    Novel,
    #[serde(rename = "Light Novel")]
    LightNovel,
    Artbook,
    Other,
}

impl BookType {
    pub const ALL: [BookType; 6] = [
        BookType::Manga,
        BookType::Comic,
        BookType::Novel,
        BookType::LightNovel,
        BookType::Artbook,
        BookType::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BookType::Manga => "Manga",
            BookType::Comic => "Comic",
            BookType::Novel => "Novel",
            BookType::LightNovel => "Light Novel",
            BookType::Artbook => "Artbook",
            BookType::Other => "Other",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct BookDto {
    #[serde(rename = "_id")]
    pub id: i32,
    #[serde(flatten)]
    pub item: ItemDto,
    pub authors: Vec<String>,
    pub language: Option<String>,
    #[serde(rename = "type")]
    pub book_type: BookType,
    pub volume: Option<i32>,
    pub isbn: Option<String>,
}

impl Identified for BookDto {
    fn id(&self) -> i32 {
        self.id
    }
}

impl CatalogItem for BookDto {
    fn item(&self) -> &ItemDto {
        &self.item
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct BookFieldsDto {
    #[serde(flatten)]
    pub item: ItemFieldsDto,
    pub authors: Option<Vec<String>>,
    pub language: Option<String>,
    /// One of the `BookType` names; validated on the server.
    #[serde(rename = "type")]
    pub book_type: Option<String>,
    pub volume: Option<i32>,
    pub isbn: Option<String>,
}

impl From<&BookDto> for BookFieldsDto {
    fn from(book: &BookDto) -> Self {
        Self {
            item: ItemFieldsDto::from(&book.item),
            authors: Some(book.authors.clone()),
            language: book.language.clone(),
            book_type: Some(book.book_type.as_str().to_string()),
            volume: book.volume,
            isbn: book.isbn.clone(),
        }
    }
}
