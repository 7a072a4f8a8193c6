//! Conversion between string lists and the JSON columns that store them.

use sea_orm::entity::prelude::Json;

pub fn to_json_list(values: &[String]) -> Json {
    Json::Array(values.iter().cloned().map(Json::String).collect())
}

/// Reads a JSON array column back into strings, skipping non-string elements.
pub fn from_json_list(value: Json) -> Vec<String> {
    match value {
        Json::Array(values) => values
            .into_iter()
            .filter_map(|v| match v {
                Json::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}
