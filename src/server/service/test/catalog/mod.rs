use crate::{
    model::{
        book::BookFieldsDto, company::CompanyFieldsDto, item::ItemFieldsDto,
        series::SeriesFieldsDto,
    },
    server::{
        error::{domain::DomainError, AppError},
        model::{book::Book, company::Company, series::Series},
        service::catalog::{CatalogDocument, CatalogService},
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_id;
mod unique_index;
mod update;

fn series_params(name: &str, items: &[&str]) -> <Series as CatalogDocument>::Params {
    Series::validate(SeriesFieldsDto {
        name: Some(name.to_string()),
        items: items.iter().map(|i| i.to_string()).collect(),
    })
    .unwrap()
}

fn company_params(name: &str) -> <Company as CatalogDocument>::Params {
    Company::validate(CompanyFieldsDto {
        name: Some(name.to_string()),
        ..Default::default()
    })
    .unwrap()
}

fn book_params(title: &str) -> <Book as CatalogDocument>::Params {
    Book::validate(BookFieldsDto {
        item: ItemFieldsDto {
            title: Some(title.to_string()),
            physical: Some(true),
            digital: Some(false),
            publisher: Some("Gollancz".to_string()),
            ..Default::default()
        },
        authors: Some(vec!["Terry Pratchett".to_string()]),
        book_type: Some("Novel".to_string()),
        ..Default::default()
    })
    .unwrap()
}

fn domain_error(result: Result<impl std::fmt::Debug, AppError>) -> DomainError {
    match result {
        Err(AppError::DomainErr(err)) => err,
        other => panic!("expected domain error, got {:?}", other),
    }
}
