use crate::{
    model::company::{CompanyDto, CompanyFieldsDto},
    server::{
        error::AppError,
        model::validate::{required_text, NAME_REQUIRED},
        util::json::from_json_list,
    },
};

/// A publisher or studio.
#[derive(Debug, Clone, PartialEq)]
pub struct Company {
    pub id: i32,
    /// Unique across all companies.
    pub name: String,
    pub titles: Vec<String>,
    pub owners: Vec<String>,
}

impl Company {
    pub fn into_dto(self) -> CompanyDto {
        CompanyDto {
            id: self.id,
            name: self.name,
            titles: self.titles,
            owners: self.owners,
        }
    }

    pub fn from_entity(entity: entity::company::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            titles: from_json_list(entity.titles),
            owners: from_json_list(entity.owners),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompanyParams {
    pub name: String,
    pub titles: Vec<String>,
    pub owners: Vec<String>,
}

impl CompanyParams {
    pub fn from_dto(dto: CompanyFieldsDto) -> Result<Self, AppError> {
        Ok(Self {
            name: required_text(dto.name, NAME_REQUIRED)?,
            titles: dto.titles,
            owners: dto.owners,
        })
    }
}
