use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr};

use crate::{
    model::{
        catalog::CatalogKind,
        disc::{DiscDto, DiscFieldsDto},
    },
    server::{
        data::disc::DiscRepository,
        error::AppError,
        model::disc::{Disc, DiscParams},
        service::catalog::{CatalogDocument, CatalogService},
    },
};

pub type DiscService<'a> = CatalogService<'a, Disc>;

#[async_trait]
impl CatalogDocument for Disc {
    type Params = DiscParams;
    type Dto = DiscDto;
    type FieldsDto = DiscFieldsDto;

    const KIND: CatalogKind = CatalogKind::Disc;

    fn validate(fields: DiscFieldsDto) -> Result<DiscParams, AppError> {
        DiscParams::from_dto(fields)
    }

    fn dto(self) -> DiscDto {
        self.into_dto()
    }

    fn id(&self) -> i32 {
        self.id
    }

    async fn find_all(db: &DatabaseConnection) -> Result<Vec<Self>, DbErr> {
        DiscRepository::new(db).get_all().await
    }

    async fn find_by_id(db: &DatabaseConnection, id: i32) -> Result<Option<Self>, DbErr> {
        DiscRepository::new(db).get_by_id(id).await
    }

    async fn insert(db: &DatabaseConnection, params: DiscParams) -> Result<Self, DbErr> {
        DiscRepository::new(db).create(params).await
    }

    async fn replace(
        db: &DatabaseConnection,
        id: i32,
        params: DiscParams,
    ) -> Result<Self, DbErr> {
        DiscRepository::new(db).update(id, params).await
    }

    async fn remove(db: &DatabaseConnection, id: i32) -> Result<(), DbErr> {
        DiscRepository::new(db).delete(id).await
    }
}
