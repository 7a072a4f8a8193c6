use super::item_params;
use crate::{
    model::book::BookType,
    server::{data::book::BookRepository, model::book::BookParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get;
mod update;

fn params(title: &str) -> BookParams {
    BookParams {
        item: item_params(title),
        authors: vec!["Terry Pratchett".to_string()],
        language: Some("English".to_string()),
        book_type: BookType::Novel,
        volume: None,
        isbn: None,
    }
}
