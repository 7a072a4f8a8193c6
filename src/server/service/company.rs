use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr};

use crate::{
    model::{
        catalog::CatalogKind,
        company::{CompanyDto, CompanyFieldsDto},
    },
    server::{
        data::company::CompanyRepository,
        error::AppError,
        model::company::{Company, CompanyParams},
        service::catalog::{CatalogDocument, CatalogService},
    },
};

pub type CompanyService<'a> = CatalogService<'a, Company>;

#[async_trait]
impl CatalogDocument for Company {
    type Params = CompanyParams;
    type Dto = CompanyDto;
    type FieldsDto = CompanyFieldsDto;

    const KIND: CatalogKind = CatalogKind::Company;

    fn validate(fields: CompanyFieldsDto) -> Result<CompanyParams, AppError> {
        CompanyParams::from_dto(fields)
    }

    fn dto(self) -> CompanyDto {
        self.into_dto()
    }

    fn id(&self) -> i32 {
        self.id
    }

    /// Company names are unique.
    fn natural_key(params: &CompanyParams) -> Option<&str> {
        Some(&params.name)
    }

    fn current_key(&self) -> Option<&str> {
        Some(&self.name)
    }

    async fn find_by_natural_key(
        db: &DatabaseConnection,
        key: &str,
    ) -> Result<Option<Self>, DbErr> {
        CompanyRepository::new(db).find_by_name(key).await
    }

    async fn find_all(db: &DatabaseConnection) -> Result<Vec<Self>, DbErr> {
        CompanyRepository::new(db).get_all().await
    }

    async fn find_by_id(db: &DatabaseConnection, id: i32) -> Result<Option<Self>, DbErr> {
        CompanyRepository::new(db).get_by_id(id).await
    }

    async fn insert(db: &DatabaseConnection, params: CompanyParams) -> Result<Self, DbErr> {
        CompanyRepository::new(db).create(params).await
    }

    async fn replace(
        db: &DatabaseConnection,
        id: i32,
        params: CompanyParams,
    ) -> Result<Self, DbErr> {
        CompanyRepository::new(db).update(id, params).await
    }

    async fn remove(db: &DatabaseConnection, id: i32) -> Result<(), DbErr> {
        CompanyRepository::new(db).delete(id).await
    }
}
