use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

use crate::model::catalog::Identified;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreatorDto {
    #[serde(rename = "_id")]
    pub id: i32,
    pub first_name: String,
    pub middle_initials: Option<String>,
    pub last_name: Option<String>,
    pub works: Vec<String>,
}

impl CreatorDto {
    /// Display name in "First M. Last" form.
    pub fn full_name(&self) -> String {
        [
            Some(self.first_name.as_str()),
            self.middle_initials.as_deref(),
            self.last_name.as_deref(),
        ]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
    }
}

impl Identified for CreatorDto {
    fn id(&self) -> i32 {
        self.id
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreatorFieldsDto {
    pub first_name: Option<String>,
    pub middle_initials: Option<String>,
    pub last_name: Option<String>,
    #[serde(default)]
    pub works: Vec<String>,
}

impl CreatorFieldsDto {
    /// Splits a free-text full name into first, middle and last parts.
    ///
    /// The first word becomes the first name, the last word (if there is more than one)
    /// the last name, and anything in between the middle initials.
    pub fn from_full_name(full_name: &str) -> Self {
        let parts: Vec<&str> = full_name.split_whitespace().collect();

        let (first_name, middle_initials, last_name) = match parts.as_slice() {
            [] => (None, None, None),
            [first] => (Some(first.to_string()), None, None),
            [first, last] => (Some(first.to_string()), None, Some(last.to_string())),
            [first, middle @ .., last] => (
                Some(first.to_string()),
                Some(middle.join(" ")),
                Some(last.to_string()),
            ),
        };

        Self {
            first_name,
            middle_initials,
            last_name,
            works: Vec::new(),
        }
    }
}

impl From<&CreatorDto> for CreatorFieldsDto {
    fn from(creator: &CreatorDto) -> Self {
        Self {
            first_name: Some(creator.first_name.clone()),
            middle_initials: creator.middle_initials.clone(),
            last_name: creator.last_name.clone(),
            works: creator.works.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_three_part_name() {
        let fields = CreatorFieldsDto::from_full_name("Ursula K. Le_Guin");
        assert_eq!(fields.first_name.as_deref(), Some("Ursula"));
        assert_eq!(fields.middle_initials.as_deref(), Some("K."));
        assert_eq!(fields.last_name.as_deref(), Some("Le_Guin"));
    }

    #[test]
    fn single_word_name_is_first_name_only() {
        let fields = CreatorFieldsDto::from_full_name("  CLAMP ");
        assert_eq!(fields.first_name.as_deref(), Some("CLAMP"));
        assert_eq!(fields.middle_initials, None);
        assert_eq!(fields.last_name, None);
    }

    #[test]
    fn full_name_skips_missing_parts() {
        let creator = CreatorDto {
            id: 1,
            first_name: "Naoki".to_string(),
            middle_initials: None,
            last_name: Some("Urasawa".to_string()),
            works: vec![],
        };
        assert_eq!(creator.full_name(), "Naoki Urasawa");
    }
}
