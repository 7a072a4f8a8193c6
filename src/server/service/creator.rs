use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr};

use crate::{
    model::{
        catalog::CatalogKind,
        creator::{CreatorDto, CreatorFieldsDto},
    },
    server::{
        data::creator::CreatorRepository,
        error::AppError,
        model::creator::{Creator, CreatorParams},
        service::catalog::{CatalogDocument, CatalogService},
    },
};

pub type CreatorService<'a> = CatalogService<'a, Creator>;

#[async_trait]
impl CatalogDocument for Creator {
    type Params = CreatorParams;
    type Dto = CreatorDto;
    type FieldsDto = CreatorFieldsDto;

    const KIND: CatalogKind = CatalogKind::Creator;

    fn validate(fields: CreatorFieldsDto) -> Result<CreatorParams, AppError> {
        CreatorParams::from_dto(fields)
    }

    fn dto(self) -> CreatorDto {
        self.into_dto()
    }

    fn id(&self) -> i32 {
        self.id
    }

    async fn find_all(db: &DatabaseConnection) -> Result<Vec<Self>, DbErr> {
        CreatorRepository::new(db).get_all().await
    }

    async fn find_by_id(db: &DatabaseConnection, id: i32) -> Result<Option<Self>, DbErr> {
        CreatorRepository::new(db).get_by_id(id).await
    }

    async fn insert(db: &DatabaseConnection, params: CreatorParams) -> Result<Self, DbErr> {
        CreatorRepository::new(db).create(params).await
    }

    async fn replace(
        db: &DatabaseConnection,
        id: i32,
        params: CreatorParams,
    ) -> Result<Self, DbErr> {
        CreatorRepository::new(db).update(id, params).await
    }

    async fn remove(db: &DatabaseConnection, id: i32) -> Result<(), DbErr> {
        CreatorRepository::new(db).delete(id).await
    }
}
