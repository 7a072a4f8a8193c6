use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr};

use crate::{
    model::{
        catalog::CatalogKind,
        game::{GameDto, GameFieldsDto},
    },
    server::{
        data::game::GameRepository,
        error::AppError,
        model::game::{Game, GameParams},
        service::catalog::{CatalogDocument, CatalogService},
    },
};

pub type GameService<'a> = CatalogService<'a, Game>;

#[async_trait]
impl CatalogDocument for Game {
    type Params = GameParams;
    type Dto = GameDto;
    type FieldsDto = GameFieldsDto;

    const KIND: CatalogKind = CatalogKind::Game;

    fn validate(fields: GameFieldsDto) -> Result<GameParams, AppError> {
        GameParams::from_dto(fields)
    }

    fn dto(self) -> GameDto {
        self.into_dto()
    }

    fn id(&self) -> i32 {
        self.id
    }

    async fn find_all(db: &DatabaseConnection) -> Result<Vec<Self>, DbErr> {
        GameRepository::new(db).get_all().await
    }

    async fn find_by_id(db: &DatabaseConnection, id: i32) -> Result<Option<Self>, DbErr> {
        GameRepository::new(db).get_by_id(id).await
    }

    async fn insert(db: &DatabaseConnection, params: GameParams) -> Result<Self, DbErr> {
        GameRepository::new(db).create(params).await
    }

    async fn replace(
        db: &DatabaseConnection,
        id: i32,
        params: GameParams,
    ) -> Result<Self, DbErr> {
        GameRepository::new(db).update(id, params).await
    }

    async fn remove(db: &DatabaseConnection, id: i32) -> Result<(), DbErr> {
        GameRepository::new(db).delete(id).await
    }
}
