//! Company data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    model::company::{Company, CompanyParams},
    util::json::to_json_list,
};

/// Repository providing database operations for company management.
pub struct CompanyRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CompanyRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new company.
    ///
    /// # Returns
    /// - `Ok(Company)` - The created company with generated ID
    /// - `Err(DbErr)` - Database error, including unique violations on the name
    pub async fn create(&self, params: CompanyParams) -> Result<Company, DbErr> {
        let entity = entity::company::ActiveModel {
            name: ActiveValue::Set(params.name),
            titles: ActiveValue::Set(to_json_list(&params.titles)),
            owners: ActiveValue::Set(to_json_list(&params.owners)),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Company::from_entity(entity))
    }

    pub async fn get_all(&self) -> Result<Vec<Company>, DbErr> {
        let entities = entity::prelude::Company::find()
            .order_by_asc(entity::company::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Company::from_entity).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Company>, DbErr> {
        let entity = entity::prelude::Company::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Company::from_entity))
    }

    /// Finds a company by its exact name.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Company>, DbErr> {
        let entity = entity::prelude::Company::find()
            .filter(entity::company::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(Company::from_entity))
    }

    /// Overwrites every field of an existing company.
    ///
    /// # Returns
    /// - `Ok(Company)` - The updated company
    /// - `Err(DbErr::RecordNotFound)` - No company exists with the specified ID
    pub async fn update(&self, id: i32, params: CompanyParams) -> Result<Company, DbErr> {
        let company = entity::prelude::Company::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Company with id {} not found",
                id
            )))?;

        let mut active_model: entity::company::ActiveModel = company.into();
        active_model.name = ActiveValue::Set(params.name);
        active_model.titles = ActiveValue::Set(to_json_list(&params.titles));
        active_model.owners = ActiveValue::Set(to_json_list(&params.owners));

        let entity = active_model.update(self.db).await?;

        Ok(Company::from_entity(entity))
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Company::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
