use crate::{
    model::creator::{CreatorDto, CreatorFieldsDto},
    server::{
        error::AppError,
        model::validate::{optional_text, required_text, FIRST_NAME_REQUIRED},
        util::json::from_json_list,
    },
};

/// An author, director or other credited person.
#[derive(Debug, Clone, PartialEq)]
pub struct Creator {
    pub id: i32,
    pub first_name: String,
    pub middle_initials: Option<String>,
    pub last_name: Option<String>,
    pub works: Vec<String>,
}

impl Creator {
    pub fn into_dto(self) -> CreatorDto {
        CreatorDto {
            id: self.id,
            first_name: self.first_name,
            middle_initials: self.middle_initials,
            last_name: self.last_name,
            works: self.works,
        }
    }

    pub fn from_entity(entity: entity::creator::Model) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            middle_initials: entity.middle_initials,
            last_name: entity.last_name,
            works: from_json_list(entity.works),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreatorParams {
    pub first_name: String,
    pub middle_initials: Option<String>,
    pub last_name: Option<String>,
    pub works: Vec<String>,
}

impl CreatorParams {
    pub fn from_dto(dto: CreatorFieldsDto) -> Result<Self, AppError> {
        Ok(Self {
            first_name: required_text(dto.first_name, FIRST_NAME_REQUIRED)?,
            middle_initials: optional_text(dto.middle_initials),
            last_name: optional_text(dto.last_name),
            works: dto.works,
        })
    }
}
