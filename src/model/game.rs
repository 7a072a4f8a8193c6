use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

use crate::model::{
    catalog::Identified,
    item::{CatalogItem, ItemDto, ItemFieldsDto},
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct GameDto {
    #[serde(rename = "_id")]
    pub id: i32,
    #[serde(flatten)]
    pub item: ItemDto,
    pub platforms: Vec<String>,
    pub languages: Vec<String>,
    pub multiplayer: bool,
    pub genre: Option<String>,
}

impl Identified for GameDto {
    fn id(&self) -> i32 {
        self.id
    }
}

impl CatalogItem for GameDto {
    fn item(&self) -> &ItemDto {
        &self.item
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct GameFieldsDto {
    #[serde(flatten)]
    pub item: ItemFieldsDto,
    pub platforms: Option<Vec<String>>,
    #[serde(default)]
    pub languages: Vec<String>,
    pub multiplayer: Option<bool>,
    pub genre: Option<String>,
}

impl From<&GameDto> for GameFieldsDto {
    fn from(game: &GameDto) -> Self {
        Self {
            item: ItemFieldsDto::from(&game.item),
            platforms: Some(game.platforms.clone()),
            languages: game.languages.clone(),
            multiplayer: Some(game.multiplayer),
            genre: game.genre.clone(),
        }
    }
}
