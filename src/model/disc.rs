use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

use crate::model::{
    catalog::Identified,
    item::{CatalogItem, ItemDto, ItemFieldsDto},
};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub enum DiscFormat {
    #[serde(rename = "DVD")]
    Dvd,
    #[serde(rename = "Blu-ray")]
    BluRay,
    #[serde(rename = "4K UHD")]
    UltraHd,
    #[serde(rename = "CD")]
    Cd,
}

impl DiscFormat {
    pub const ALL: [DiscFormat; 4] = [
        DiscFormat::Dvd,
        DiscFormat::BluRay,
        DiscFormat::UltraHd,
        DiscFormat::Cd,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DiscFormat::Dvd => "DVD",
            DiscFormat::BluRay => "Blu-ray",
            DiscFormat::UltraHd => "4K UHD",
            DiscFormat::Cd => "CD",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == value)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct DiscDto {
    #[serde(rename = "_id")]
    pub id: i32,
    #[serde(flatten)]
    pub item: ItemDto,
    pub format: Vec<DiscFormat>,
    pub languages: Vec<String>,
    pub subtitles: Vec<String>,
    pub volume: Option<i32>,
    pub director: Option<String>,
    pub studio: Option<String>,
    pub is_collection: bool,
}

impl Identified for DiscDto {
    fn id(&self) -> i32 {
        self.id
    }
}

impl CatalogItem for DiscDto {
    fn item(&self) -> &ItemDto {
        &self.item
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct DiscFieldsDto {
    #[serde(flatten)]
    pub item: ItemFieldsDto,
    pub format: Option<Vec<String>>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub subtitles: Vec<String>,
    pub volume: Option<i32>,
    pub director: Option<String>,
    pub studio: Option<String>,
    pub is_collection: Option<bool>,
}

impl From<&DiscDto> for DiscFieldsDto {
    fn from(disc: &DiscDto) -> Self {
        Self {
            item: ItemFieldsDto::from(&disc.item),
            format: Some(disc.format.iter().map(|f| f.as_str().to_string()).collect()),
            languages: disc.languages.clone(),
            subtitles: disc.subtitles.clone(),
            volume: disc.volume,
            director: disc.director.clone(),
            studio: disc.studio.clone(),
            is_collection: Some(disc.is_collection),
        }
    }
}
