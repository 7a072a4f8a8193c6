//! Company factory for creating test company entities.

use crate::factory::helpers::{json_list, next_id};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test companies with customizable fields.
pub struct CompanyFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    titles: Vec<String>,
    owners: Vec<String>,
}

impl<'a> CompanyFactory<'a> {
    /// Creates a new CompanyFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Company {id}"`
    /// - titles, owners: empty
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Company {}", next_id()),
            titles: Vec::new(),
            owners: Vec::new(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn titles<S: AsRef<str>>(mut self, titles: &[S]) -> Self {
        self.titles = titles.iter().map(|t| t.as_ref().to_string()).collect();
        self
    }

    pub fn owners<S: AsRef<str>>(mut self, owners: &[S]) -> Self {
        self.owners = owners.iter().map(|o| o.as_ref().to_string()).collect();
        self
    }

    /// Builds and inserts the company entity into the database.
    pub async fn build(self) -> Result<entity::company::Model, DbErr> {
        entity::company::ActiveModel {
            name: ActiveValue::Set(self.name),
            titles: ActiveValue::Set(json_list(&self.titles)),
            owners: ActiveValue::Set(json_list(&self.owners)),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a company with default values.
pub async fn create_company(db: &DatabaseConnection) -> Result<entity::company::Model, DbErr> {
    CompanyFactory::new(db).build().await
}
