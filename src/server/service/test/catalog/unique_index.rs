use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use super::*;
use crate::{
    model::{catalog::CatalogKind, series::SeriesDto},
    server::model::series::SeriesParams,
};

/// Series whose name lookup always misses, so writes go straight to the unique index the
/// way a concurrent writer that passed the check at the same moment would.
#[derive(Debug, Clone, PartialEq)]
struct UncheckedSeries(Series);

#[async_trait]
impl CatalogDocument for UncheckedSeries {
    type Params = SeriesParams;
    type Dto = SeriesDto;
    type FieldsDto = SeriesFieldsDto;

    const KIND: CatalogKind = CatalogKind::Series;

    fn validate(fields: SeriesFieldsDto) -> Result<SeriesParams, AppError> {
        Series::validate(fields)
    }

    fn dto(self) -> SeriesDto {
        self.0.dto()
    }

    fn id(&self) -> i32 {
        self.0.id
    }

    fn natural_key(params: &SeriesParams) -> Option<&str> {
        Series::natural_key(params)
    }

    fn current_key(&self) -> Option<&str> {
        self.0.current_key()
    }

    async fn find_all(db: &DatabaseConnection) -> Result<Vec<Self>, DbErr> {
        Ok(Series::find_all(db).await?.into_iter().map(Self).collect())
    }

    async fn find_by_id(db: &DatabaseConnection, id: i32) -> Result<Option<Self>, DbErr> {
        Ok(Series::find_by_id(db, id).await?.map(Self))
    }

    async fn insert(db: &DatabaseConnection, params: SeriesParams) -> Result<Self, DbErr> {
        Series::insert(db, params).await.map(Self)
    }

    async fn replace(
        db: &DatabaseConnection,
        id: i32,
        params: SeriesParams,
    ) -> Result<Self, DbErr> {
        Series::replace(db, id, params).await.map(Self)
    }

    async fn remove(db: &DatabaseConnection, id: i32) -> Result<(), DbErr> {
        Series::remove(db, id).await
    }
}

/// Tests a create that only the unique index stops.
///
/// Expected: Err(DomainError::Duplicate("Series \"test\" already exists")) and one series
#[tokio::test]
async fn create_rejected_by_index_is_duplicate() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CatalogService::<UncheckedSeries>::new(db);
    service.create(series_params("test", &[])).await.unwrap();

    let err = domain_error(service.create(series_params("test", &["a"])).await);

    assert_eq!(
        err,
        DomainError::Duplicate("Series \"test\" already exists".to_string())
    );
    assert_eq!(service.get_all().await.unwrap().len(), 1);

    Ok(())
}

/// Tests an update renaming onto a taken name that only the unique index stops.
///
/// Expected: Err(DomainError::Duplicate("Series \"test\" already exists")), name unchanged
#[tokio::test]
async fn update_rejected_by_index_is_duplicate() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::series::SeriesFactory::new(db).name("test").build().await?;
    let other = factory::series::SeriesFactory::new(db)
        .name("other")
        .build()
        .await?;

    let service = CatalogService::<UncheckedSeries>::new(db);
    let id = other.id.to_string();

    let err = domain_error(service.update(&id, series_params("test", &[])).await);

    assert_eq!(
        err,
        DomainError::Duplicate("Series \"test\" already exists".to_string())
    );
    assert_eq!(service.get_by_id(&id).await.unwrap().0.name, "other");

    Ok(())
}
