use sea_orm::DbErr;

use crate::{
    model::disc::{DiscDto, DiscFieldsDto, DiscFormat},
    server::{
        error::AppError,
        model::{
            item::ItemParams,
            validate::{
                one_of, optional_text, required, FORMAT_REQUIRED, IS_COLLECTION_REQUIRED,
            },
        },
        util::json::from_json_list,
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Disc {
    pub id: i32,
    pub item: ItemParams,
    pub format: Vec<DiscFormat>,
    pub languages: Vec<String>,
    pub subtitles: Vec<String>,
    pub volume: Option<i32>,
    pub director: Option<String>,
    pub studio: Option<String>,
    pub is_collection: bool,
}

impl Disc {
    pub fn into_dto(self) -> DiscDto {
        DiscDto {
            id: self.id,
            item: self.item.into_dto(),
            format: self.format,
            languages: self.languages,
            subtitles: self.subtitles,
            volume: self.volume,
            director: self.director,
            studio: self.studio,
            is_collection: self.is_collection,
        }
    }

    /// Converts an entity model to a disc at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Disc)` - The converted disc
    /// - `Err(DbErr::Type)` - The stored format list holds an unknown format
    pub fn from_entity(entity: entity::disc::Model) -> Result<Self, DbErr> {
        let format = from_json_list(entity.format)
            .iter()
            .map(|name| {
                DiscFormat::parse(name).ok_or_else(|| {
                    DbErr::Type(format!(
                        "Unknown disc format '{}' stored for disc {}",
                        name, entity.id
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

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
            format,
            languages: from_json_list(entity.languages),
            subtitles: from_json_list(entity.subtitles),
            volume: entity.volume,
            director: entity.director,
            studio: entity.studio,
            is_collection: entity.is_collection,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DiscParams {
    pub item: ItemParams,
    pub format: Vec<DiscFormat>,
    pub languages: Vec<String>,
    pub subtitles: Vec<String>,
    pub volume: Option<i32>,
    pub director: Option<String>,
    pub studio: Option<String>,
    pub is_collection: bool,
}

impl DiscParams {
    pub fn from_dto(dto: DiscFieldsDto) -> Result<Self, AppError> {
        let item = ItemParams::from_dto(dto.item)?;

        let format = required(dto.format.filter(|f| !f.is_empty()), FORMAT_REQUIRED)?
            .iter()
            .map(|name| one_of(name, "Format", &DiscFormat::ALL, DiscFormat::as_str))
            .collect::<Result<Vec<_>, _>>()?;
        let is_collection = required(dto.is_collection, IS_COLLECTION_REQUIRED)?;

        Ok(Self {
            item,
            format,
            languages: dto.languages,
            subtitles: dto.subtitles,
            volume: dto.volume,
            director: optional_text(dto.director),
            studio: optional_text(dto.studio),
            is_collection,
        })
    }
}
