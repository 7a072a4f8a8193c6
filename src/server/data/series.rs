//! Series data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    model::series::{Series, SeriesParams},
    util::json::to_json_list,
};

/// Repository providing database operations for series management.
pub struct SeriesRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeriesRepository<'a> {
    /// Creates a new SeriesRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `SeriesRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new series.
    ///
    /// # Arguments
    /// - `params` - Validated series fields
    ///
    /// # Returns
    /// - `Ok(Series)` - The created series with generated ID
    /// - `Err(DbErr)` - Database error, including unique violations on the name
    pub async fn create(&self, params: SeriesParams) -> Result<Series, DbErr> {
        let entity = entity::series::ActiveModel {
            name: ActiveValue::Set(params.name),
            items: ActiveValue::Set(to_json_list(&params.items)),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Series::from_entity(entity))
    }

    /// Gets every series in insertion order.
    pub async fn get_all(&self) -> Result<Vec<Series>, DbErr> {
        let entities = entity::prelude::Series::find()
            .order_by_asc(entity::series::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Series::from_entity).collect())
    }

    /// Gets a series by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Series))` - Series found
    /// - `Ok(None)` - No series with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Series>, DbErr> {
        let entity = entity::prelude::Series::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Series::from_entity))
    }

    /// Finds a series by its exact name.
    ///
    /// Used for the duplicate-name check before inserts and renames.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Series>, DbErr> {
        let entity = entity::prelude::Series::find()
            .filter(entity::series::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(Series::from_entity))
    }

    /// Overwrites every field of an existing series.
    ///
    /// # Returns
    /// - `Ok(Series)` - The updated series
    /// - `Err(DbErr::RecordNotFound)` - No series exists with the specified ID
    /// - `Err(DbErr)` - Other database error during update
    pub async fn update(&self, id: i32, params: SeriesParams) -> Result<Series, DbErr> {
        let series = entity::prelude::Series::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Series with id {} not found",
                id
            )))?;

        let mut active_model: entity::series::ActiveModel = series.into();
        active_model.name = ActiveValue::Set(params.name);
        active_model.items = ActiveValue::Set(to_json_list(&params.items));

        let entity = active_model.update(self.db).await?;

        Ok(Series::from_entity(entity))
    }

    /// Deletes a series.
    ///
    /// # Returns
    /// - `Ok(())` - Series deleted successfully (or didn't exist)
    /// - `Err(DbErr)` - Database error during delete operation
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Series::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
