use crate::{
    model::series::{SeriesDto, SeriesFieldsDto},
    server::{
        error::AppError,
        model::validate::{required_text, NAME_REQUIRED},
        util::json::from_json_list,
    },
};

/// A named series grouping books, discs and games.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub id: i32,
    /// Unique across all series.
    pub name: String,
    pub items: Vec<String>,
}

impl Series {
    pub fn into_dto(self) -> SeriesDto {
        SeriesDto {
            id: self.id,
            name: self.name,
            items: self.items,
        }
    }

    pub fn from_entity(entity: entity::series::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            items: from_json_list(entity.items),
        }
    }
}

/// Validated fields for creating or replacing a series.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesParams {
    pub name: String,
    pub items: Vec<String>,
}

impl SeriesParams {
    pub fn from_dto(dto: SeriesFieldsDto) -> Result<Self, AppError> {
        Ok(Self {
            name: required_text(dto.name, NAME_REQUIRED)?,
            items: dto.items,
        })
    }
}
