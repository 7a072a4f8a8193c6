//! Creator factory for creating test creator entities.

use crate::factory::helpers::{json_list, next_id};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test creators with customizable fields.
pub struct CreatorFactory<'a> {
    db: &'a DatabaseConnection,
    first_name: String,
    middle_initials: Option<String>,
    last_name: Option<String>,
    works: Vec<String>,
}

impl<'a> CreatorFactory<'a> {
    /// Creates a new CreatorFactory with default values.
    ///
    /// Defaults:
    /// - first_name: `"Creator"`
    /// - last_name: `"{id}"`
    /// - middle_initials: none
    /// - works: empty
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            first_name: "Creator".to_string(),
            middle_initials: None,
            last_name: Some(next_id().to_string()),
            works: Vec::new(),
        }
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn middle_initials(mut self, middle_initials: impl Into<String>) -> Self {
        self.middle_initials = Some(middle_initials.into());
        self
    }

    pub fn last_name(mut self, last_name: Option<&str>) -> Self {
        self.last_name = last_name.map(str::to_string);
        self
    }

    pub fn works<S: AsRef<str>>(mut self, works: &[S]) -> Self {
        self.works = works.iter().map(|w| w.as_ref().to_string()).collect();
        self
    }

    /// Builds and inserts the creator entity into the database.
    pub async fn build(self) -> Result<entity::creator::Model, DbErr> {
        entity::creator::ActiveModel {
            first_name: ActiveValue::Set(self.first_name),
            middle_initials: ActiveValue::Set(self.middle_initials),
            last_name: ActiveValue::Set(self.last_name),
            works: ActiveValue::Set(json_list(&self.works)),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a creator with default values.
pub async fn create_creator(db: &DatabaseConnection) -> Result<entity::creator::Model, DbErr> {
    CreatorFactory::new(db).build().await
}
