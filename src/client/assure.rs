//! Placeholder creation for records that are only referenced by name.
//!
//! Items name their series, publisher and authors as plain strings. Before saving an item
//! the form runs [`assure_item_references`] so each of those names has a matching record.

use crate::{
    client::{actions, api::ApiClient, model::error::ApiError, resource::Resource, store::Store},
    model::{
        company::{CompanyDto, CompanyFieldsDto},
        creator::{CreatorDto, CreatorFieldsDto},
        item::ItemFieldsDto,
        series::{SeriesDto, SeriesFieldsDto},
    },
};

/// A resource that can stand in for a bare name.
pub trait Placeholder: Resource {
    fn matches(&self, name: &str) -> bool;

    fn placeholder(name: &str) -> Self::Fields;
}

impl Placeholder for SeriesDto {
    fn matches(&self, name: &str) -> bool {
        self.name == name
    }

    fn placeholder(name: &str) -> SeriesFieldsDto {
        SeriesFieldsDto {
            name: Some(name.to_string()),
            items: Vec::new(),
        }
    }
}

impl Placeholder for CompanyDto {
    fn matches(&self, name: &str) -> bool {
        self.name == name
    }

    fn placeholder(name: &str) -> CompanyFieldsDto {
        CompanyFieldsDto {
            name: Some(name.to_string()),
            titles: Vec::new(),
            owners: Vec::new(),
        }
    }
}

impl Placeholder for CreatorDto {
    fn matches(&self, name: &str) -> bool {
        self.full_name() == name.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    fn placeholder(name: &str) -> CreatorFieldsDto {
        CreatorFieldsDto::from_full_name(name)
    }
}

/// Id of the `R` named `name`, creating a placeholder record when the store has none.
///
/// Only the store is consulted, so load the slice first if it may be stale.
pub async fn assure_exists<R: Placeholder>(
    client: &ApiClient,
    store: &mut Store,
    name: &str,
) -> Result<i32, ApiError> {
    let name = name.trim();

    if let Some(existing) = R::slice(store.state()).iter().find(|r| r.matches(name)) {
        return Ok(existing.id());
    }

    let created = actions::create::<R>(client, store, &R::placeholder(name)).await?;
    Ok(created.id())
}

/// Makes sure the item's series, publisher and authors exist. Blank names are skipped.
pub async fn assure_item_references(
    client: &ApiClient,
    store: &mut Store,
    item: &ItemFieldsDto,
    authors: &[String],
) -> Result<(), ApiError> {
    if let Some(series) = non_blank(item.series.as_deref()) {
        assure_exists::<SeriesDto>(client, store, series).await?;
    }

    if let Some(publisher) = non_blank(item.publisher.as_deref()) {
        assure_exists::<CompanyDto>(client, store, publisher).await?;
    }

    for author in authors {
        if let Some(author) = non_blank(Some(author)) {
            assure_exists::<CreatorDto>(client, store, author).await?;
        }
    }

    Ok(())
}

fn non_blank(name: Option<&str>) -> Option<&str> {
    name.map(str::trim).filter(|name| !name.is_empty())
}
