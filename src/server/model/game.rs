use crate::{
    model::game::{GameDto, GameFieldsDto},
    server::{
        error::AppError,
        model::{
            item::ItemParams,
            validate::{optional_text, required, MULTIPLAYER_REQUIRED, PLATFORMS_REQUIRED},
        },
        util::json::from_json_list,
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub id: i32,
    pub item: ItemParams,
    pub platforms: Vec<String>,
    pub languages: Vec<String>,
    pub multiplayer: bool,
    pub genre: Option<String>,
}

impl Game {
    pub fn into_dto(self) -> GameDto {
        GameDto {
            id: self.id,
            item: self.item.into_dto(),
            platforms: self.platforms,
            languages: self.languages,
            multiplayer: self.multiplayer,
            genre: self.genre,
        }
    }

    pub fn from_entity(entity: entity::game::Model) -> Self {
        Self {
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
            platforms: from_json_list(entity.platforms),
            languages: from_json_list(entity.languages),
            multiplayer: entity.multiplayer,
            genre: entity.genre,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameParams {
    pub item: ItemParams,
    pub platforms: Vec<String>,
    pub languages: Vec<String>,
    pub multiplayer: bool,
    pub genre: Option<String>,
}

impl GameParams {
    pub fn from_dto(dto: GameFieldsDto) -> Result<Self, AppError> {
        let item = ItemParams::from_dto(dto.item)?;

        Ok(Self {
            item,
            platforms: required(dto.platforms.filter(|p| !p.is_empty()), PLATFORMS_REQUIRED)?,
            languages: dto.languages,
            multiplayer: required(dto.multiplayer, MULTIPLAYER_REQUIRED)?,
            genre: optional_text(dto.genre),
        })
    }
}
