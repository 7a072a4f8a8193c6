use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr};

use crate::{
    model::{
        catalog::CatalogKind,
        series::{SeriesDto, SeriesFieldsDto},
    },
    server::{
        data::series::SeriesRepository,
        error::AppError,
        model::series::{Series, SeriesParams},
        service::catalog::{CatalogDocument, CatalogService},
    },
};

pub type SeriesService<'a> = CatalogService<'a, Series>;

#[async_trait]
impl CatalogDocument for Series {
    type Params = SeriesParams;
    type Dto = SeriesDto;
    type FieldsDto = SeriesFieldsDto;

    const KIND: CatalogKind = CatalogKind::Series;

    fn validate(fields: SeriesFieldsDto) -> Result<SeriesParams, AppError> {
        SeriesParams::from_dto(fields)
    }

    fn dto(self) -> SeriesDto {
        self.into_dto()
    }

    fn id(&self) -> i32 {
        self.id
    }

    /// Series names are unique.
    fn natural_key(params: &SeriesParams) -> Option<&str> {
        Some(&params.name)
    }

    fn current_key(&self) -> Option<&str> {
        Some(&self.name)
    }

    async fn find_by_natural_key(
        db: &DatabaseConnection,
        key: &str,
    ) -> Result<Option<Self>, DbErr> {
        SeriesRepository::new(db).find_by_name(key).await
    }

    async fn find_all(db: &DatabaseConnection) -> Result<Vec<Self>, DbErr> {
        SeriesRepository::new(db).get_all().await
    }

    async fn find_by_id(db: &DatabaseConnection, id: i32) -> Result<Option<Self>, DbErr> {
        SeriesRepository::new(db).get_by_id(id).await
    }

    async fn insert(db: &DatabaseConnection, params: SeriesParams) -> Result<Self, DbErr> {
        SeriesRepository::new(db).create(params).await
    }

    async fn replace(
        db: &DatabaseConnection,
        id: i32,
        params: SeriesParams,
    ) -> Result<Self, DbErr> {
        SeriesRepository::new(db).update(id, params).await
    }

    async fn remove(db: &DatabaseConnection, id: i32) -> Result<(), DbErr> {
        SeriesRepository::new(db).delete(id).await
    }
}
