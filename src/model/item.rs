//! Fields shared by books, discs and games.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

use crate::model::catalog::Identified;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ItemDto {
    pub title: String,
    pub physical: bool,
    pub digital: bool,
    /// Company name.
    pub publisher: String,
    pub list_price: Option<f64>,
    pub image: Option<String>,
    pub location: Option<String>,
    pub checked_out: bool,
    pub checked_out_by: Option<String>,
    /// Series name, if the item belongs to one.
    pub series: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ItemFieldsDto {
    pub title: Option<String>,
    pub physical: Option<bool>,
    pub digital: Option<bool>,
    pub publisher: Option<String>,
    pub list_price: Option<f64>,
    pub image: Option<String>,
    pub location: Option<String>,
    pub checked_out: Option<bool>,
    pub checked_out_by: Option<String>,
    pub series: Option<String>,
}

impl From<&ItemDto> for ItemFieldsDto {
    fn from(item: &ItemDto) -> Self {
        Self {
            title: Some(item.title.clone()),
            physical: Some(item.physical),
            digital: Some(item.digital),
            publisher: Some(item.publisher.clone()),
            list_price: item.list_price,
            image: item.image.clone(),
            location: item.location.clone(),
            checked_out: Some(item.checked_out),
            checked_out_by: item.checked_out_by.clone(),
            series: item.series.clone(),
        }
    }
}

/// A book, disc or game.
pub trait CatalogItem: Identified {
    fn item(&self) -> &ItemDto;
}
