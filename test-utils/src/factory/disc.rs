//! Disc factory for creating test disc entities.

use crate::factory::helpers::{json_list, next_id};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test discs with customizable fields.
pub struct DiscFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    publisher: String,
    series: Option<String>,
    format: Vec<String>,
    is_collection: bool,
}

impl<'a> DiscFactory<'a> {
    /// Creates a new DiscFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Disc {id}"`
    /// - publisher: `"Studio"`
    /// - format: `["DVD"]`
    /// - series: none, not a collection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            title: format!("Disc {}", next_id()),
            publisher: "Studio".to_string(),
            series: None,
            format: vec!["DVD".to_string()],
            is_collection: false,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn series(mut self, series: impl Into<String>) -> Self {
        self.series = Some(series.into());
        self
    }

    /// Sets the raw stored format list; any strings are accepted.
    pub fn format<S: AsRef<str>>(mut self, format: &[S]) -> Self {
        self.format = format.iter().map(|f| f.as_ref().to_string()).collect();
        self
    }

    pub fn is_collection(mut self, is_collection: bool) -> Self {
        self.is_collection = is_collection;
        self
    }

    /// Builds and inserts the disc entity into the database.
    pub async fn build(self) -> Result<entity::disc::Model, DbErr> {
        let empty: [&str; 0] = [];
        entity::disc::ActiveModel {
            title: ActiveValue::Set(self.title),
            physical: ActiveValue::Set(true),
            digital: ActiveValue::Set(false),
            publisher: ActiveValue::Set(self.publisher),
            list_price: ActiveValue::Set(None),
            image: ActiveValue::Set(None),
            location: ActiveValue::Set(None),
            checked_out: ActiveValue::Set(false),
            checked_out_by: ActiveValue::Set(None),
            series: ActiveValue::Set(self.series),
            format: ActiveValue::Set(json_list(&self.format)),
            languages: ActiveValue::Set(json_list(&empty)),
            subtitles: ActiveValue::Set(json_list(&empty)),
            volume: ActiveValue::Set(None),
            director: ActiveValue::Set(None),
            studio: ActiveValue::Set(None),
            is_collection: ActiveValue::Set(self.is_collection),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a disc with default values.
pub async fn create_disc(db: &DatabaseConnection) -> Result<entity::disc::Model, DbErr> {
    DiscFactory::new(db).build().await
}
