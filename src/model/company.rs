use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

use crate::model::catalog::Identified;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CompanyDto {
    #[serde(rename = "_id")]
    pub id: i32,
    pub name: String,
    pub titles: Vec<String>,
    pub owners: Vec<String>,
}

impl Identified for CompanyDto {
    fn id(&self) -> i32 {
        self.id
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CompanyFieldsDto {
    pub name: Option<String>,
    #[serde(default)]
    pub titles: Vec<String>,
    #[serde(default)]
    pub owners: Vec<String>,
}

impl From<&CompanyDto> for CompanyFieldsDto {
    fn from(company: &CompanyDto) -> Self {
        Self {
            name: Some(company.name.clone()),
            titles: company.titles.clone(),
            owners: company.owners.clone(),
        }
    }
}
