//! Game data repository for database operations.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::{
    model::game::{Game, GameParams},
    util::json::to_json_list,
};

/// Repository providing database operations for game management.
pub struct GameRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: GameParams) -> Result<Game, DbErr> {
        let mut active_model = entity::game::ActiveModel {
            ..Default::default()
        };
        apply(&mut active_model, params);

        let entity = active_model.insert(self.db).await?;

        Ok(Game::from_entity(entity))
    }

    pub async fn get_all(&self) -> Result<Vec<Game>, DbErr> {
        let entities = entity::prelude::Game::find()
            .order_by_asc(entity::game::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Game::from_entity).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Game>, DbErr> {
        let entity = entity::prelude::Game::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Game::from_entity))
    }

    /// Overwrites every field of an existing game.
    ///
    /// # Returns
    /// - `Ok(Game)` - The updated game
    /// - `Err(DbErr::RecordNotFound)` - No game exists with the specified ID
    pub async fn update(&self, id: i32, params: GameParams) -> Result<Game, DbErr> {
        let game = entity::prelude::Game::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Game with id {} not found", id)))?;

        let mut active_model: entity::game::ActiveModel = game.into();
        apply(&mut active_model, params);

        let entity = active_model.update(self.db).await?;

        Ok(Game::from_entity(entity))
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Game::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }
}

fn apply(active_model: &mut entity::game::ActiveModel, params: GameParams) {
    let item = params.item;
    active_model.title = ActiveValue::Set(item.title);
    active_model.physical = ActiveValue::Set(item.physical);
    active_model.digital = ActiveValue::Set(item.digital);
    active_model.publisher = ActiveValue::Set(item.publisher);
    active_model.list_price = ActiveValue::Set(item.list_price);
    active_model.image = ActiveValue::Set(item.image);
    active_model.location = ActiveValue::Set(item.location);
    active_model.checked_out = ActiveValue::Set(item.checked_out);
    active_model.checked_out_by = ActiveValue::Set(item.checked_out_by);
    active_model.series = ActiveValue::Set(item.series);
    active_model.platforms = ActiveValue::Set(to_json_list(&params.platforms));
    active_model.languages = ActiveValue::Set(to_json_list(&params.languages));
    active_model.multiplayer = ActiveValue::Set(params.multiplayer);
    active_model.genre = ActiveValue::Set(params.genre);
}
