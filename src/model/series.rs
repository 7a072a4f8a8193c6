use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

use crate::model::catalog::Identified;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct SeriesDto {
    #[serde(rename = "_id")]
    pub id: i32,
    pub name: String,
    pub items: Vec<String>,
}

impl Identified for SeriesDto {
    fn id(&self) -> i32 {
        self.id
    }
}

/// Fields accepted when creating or replacing a series.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct SeriesFieldsDto {
    pub name: Option<String>,
    #[serde(default)]
    pub items: Vec<String>,
}

impl From<&SeriesDto> for SeriesFieldsDto {
    fn from(series: &SeriesDto) -> Self {
        Self {
            name: Some(series.name.clone()),
            items: series.items.clone(),
        }
    }
}
