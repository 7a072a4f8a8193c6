//! Creator data repository for database operations.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::{
    model::creator::{Creator, CreatorParams},
    util::json::to_json_list,
};

/// Repository providing database operations for creator management.
///
/// Creators have no natural key, so two creators may share a name.
pub struct CreatorRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CreatorRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreatorParams) -> Result<Creator, DbErr> {
        let entity = entity::creator::ActiveModel {
            first_name: ActiveValue::Set(params.first_name),
            middle_initials: ActiveValue::Set(params.middle_initials),
            last_name: ActiveValue::Set(params.last_name),
            works: ActiveValue::Set(to_json_list(&params.works)),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Creator::from_entity(entity))
    }

    pub async fn get_all(&self) -> Result<Vec<Creator>, DbErr> {
        let entities = entity::prelude::Creator::find()
            .order_by_asc(entity::creator::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Creator::from_entity).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Creator>, DbErr> {
        let entity = entity::prelude::Creator::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Creator::from_entity))
    }

    pub async fn update(&self, id: i32, params: CreatorParams) -> Result<Creator, DbErr> {
        let creator = entity::prelude::Creator::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Creator with id {} not found",
                id
            )))?;

        let mut active_model: entity::creator::ActiveModel = creator.into();
        active_model.first_name = ActiveValue::Set(params.first_name);
        active_model.middle_initials = ActiveValue::Set(params.middle_initials);
        active_model.last_name = ActiveValue::Set(params.last_name);
        active_model.works = ActiveValue::Set(to_json_list(&params.works));

        let entity = active_model.update(self.db).await?;

        Ok(Creator::from_entity(entity))
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Creator::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
