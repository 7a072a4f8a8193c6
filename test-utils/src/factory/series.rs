//! Series factory for creating test series entities.

use crate::factory::helpers::{json_list, next_id};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test series with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let series = SeriesFactory::new(&db)
///     .name("Discworld")
///     .items(&["1", "2"])
///     .build()
///     .await?;
/// ```
pub struct SeriesFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    items: Vec<String>,
}

impl<'a> SeriesFactory<'a> {
    /// Creates a new SeriesFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Series {id}"` where id is auto-incremented
    /// - items: empty
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Series {}", next_id()),
            items: Vec::new(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn items<S: AsRef<str>>(mut self, items: &[S]) -> Self {
        self.items = items.iter().map(|i| i.as_ref().to_string()).collect();
        self
    }

    /// Builds and inserts the series entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::series::Model)` - Created series entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::series::Model, DbErr> {
        entity::series::ActiveModel {
            name: ActiveValue::Set(self.name),
            items: ActiveValue::Set(json_list(&self.items)),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a series with default values.
pub async fn create_series(db: &DatabaseConnection) -> Result<entity::series::Model, DbErr> {
    SeriesFactory::new(db).build().await
}
