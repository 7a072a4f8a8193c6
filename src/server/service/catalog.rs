//! Generic CRUD over the six catalog types.

use std::marker::PhantomData;

use async_trait::async_trait;
use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, DbErr, SqlErr};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    model::catalog::CatalogKind,
    server::{
        error::{domain::DomainError, AppError},
        util::parse::parse_id,
    },
};

/// A catalog record type and the storage operations the generic service needs.
///
/// Implementors provide validation, DTO conversion and the five repository calls. Types
/// with a unique natural key (series and company names) also override `natural_key`,
/// `current_key` and `find_by_natural_key`; the defaults describe a type with no key.
#[async_trait]
pub trait CatalogDocument: Sized + Send + Sync + 'static {
    /// Validated fields accepted by `insert` and `replace`.
    type Params: Send + Sync + 'static;
    /// Response body for a single record.
    type Dto: Serialize + Send + 'static;
    /// Raw request fields, validated into `Params`.
    type FieldsDto: DeserializeOwned + Send + 'static;

    const KIND: CatalogKind;

    fn validate(fields: Self::FieldsDto) -> Result<Self::Params, AppError>;

    fn dto(self) -> Self::Dto;

    fn id(&self) -> i32;

    fn natural_key(_params: &Self::Params) -> Option<&str> {
        None
    }

    fn current_key(&self) -> Option<&str> {
        None
    }

    async fn find_by_natural_key(
        _db: &DatabaseConnection,
        _key: &str,
    ) -> Result<Option<Self>, DbErr> {
        Ok(None)
    }

    async fn find_all(db: &DatabaseConnection) -> Result<Vec<Self>, DbErr>;

    async fn find_by_id(db: &DatabaseConnection, id: i32) -> Result<Option<Self>, DbErr>;

    async fn insert(db: &DatabaseConnection, params: Self::Params) -> Result<Self, DbErr>;

    async fn replace(
        db: &DatabaseConnection,
        id: i32,
        params: Self::Params,
    ) -> Result<Self, DbErr>;

    async fn remove(db: &DatabaseConnection, id: i32) -> Result<(), DbErr>;
}

/// `"<Kind> not found"`.
pub fn not_found(kind: CatalogKind) -> DomainError {
    DomainError::NotFound(format!("{} not found", kind.label()))
}

/// `"<Kind> \"<key>\" already exists"`.
pub fn duplicate(kind: CatalogKind, key: &str) -> DomainError {
    DomainError::Duplicate(format!("{} \"{}\" already exists", kind.label(), key))
}

/// Whether a database error is a unique index rejecting the write.
pub fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

/// CRUD service shared by every catalog type.
///
/// Ids arrive as raw path segments. A segment that cannot be an id is treated exactly like
/// an id with no record behind it.
pub struct CatalogService<'a, D> {
    db: &'a DatabaseConnection,
    document: PhantomData<D>,
}

impl<'a, D: CatalogDocument> CatalogService<'a, D> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            document: PhantomData,
        }
    }

    /// Gets every record of this type in insertion order.
    pub async fn get_all(&self) -> Result<Vec<D>, AppError> {
        Ok(D::find_all(self.db).await?)
    }

    /// Gets a single record.
    ///
    /// Lookup failures of any kind, including an unparseable id, are reported as
    /// `DomainError::NotFound` with the type's message.
    ///
    /// # Returns
    /// - `Ok(D)` - The record
    /// - `Err(AppError::DomainErr(NotFound))` - No record, or the lookup failed
    pub async fn get_by_id(&self, id: &str) -> Result<D, AppError> {
        let Some(parsed) = parse_id(id) else {
            return Err(not_found(D::KIND).into());
        };

        match D::find_by_id(self.db, parsed).await {
            Ok(Some(document)) => Ok(document),
            Ok(None) => Err(not_found(D::KIND).into()),
            Err(err) => {
                tracing::warn!("{} lookup for id {} failed: {}", D::KIND, parsed, err);
                Err(not_found(D::KIND).into())
            }
        }
    }

    /// Creates a record after checking its natural key is free.
    ///
    /// # Returns
    /// - `Ok(D)` - The created record
    /// - `Err(AppError::DomainErr(Duplicate))` - Another record already uses the key
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, params: D::Params) -> Result<D, AppError> {
        let key = D::natural_key(&params).map(str::to_string);
        if let Some(key) = &key {
            self.ensure_key_free(key).await?;
        }

        D::insert(self.db, params)
            .await
            .map_err(|err| write_error::<D>(err, key.as_deref()))
    }

    /// Replaces every field of an existing record.
    ///
    /// The natural key is only re-checked when it differs from the stored one, so saving a
    /// record unchanged never collides with itself.
    ///
    /// # Returns
    /// - `Ok(D)` - The updated record
    /// - `Err(AppError::DomainErr(NotFound))` - No record with that id
    /// - `Err(AppError::DomainErr(Duplicate))` - The new key belongs to another record
    pub async fn update(&self, id: &str, params: D::Params) -> Result<D, AppError> {
        let existing = self.get_by_id(id).await?;

        let key = D::natural_key(&params).map(str::to_string);
        if let Some(key) = &key {
            if existing.current_key() != Some(key.as_str()) {
                self.ensure_key_free(key).await?;
            }
        }

        D::replace(self.db, existing.id(), params)
            .await
            .map_err(|err| write_error::<D>(err, key.as_deref()))
    }

    /// Deletes a record. Deleting an id with no record behind it succeeds.
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let Some(parsed) = parse_id(id) else {
            return Ok(());
        };

        D::remove(self.db, parsed).await?;

        Ok(())
    }

    async fn ensure_key_free(&self, key: &str) -> Result<(), AppError> {
        if D::find_by_natural_key(self.db, key).await?.is_some() {
            return Err(duplicate(D::KIND, key).into());
        }

        Ok(())
    }
}

/// Maps write failures onto domain errors where they have a domain meaning.
///
/// A unique violation here means a concurrent writer took the key between the check and
/// the write.
fn write_error<D: CatalogDocument>(err: DbErr, key: Option<&str>) -> AppError {
    match (&err, key) {
        (DbErr::RecordNotFound(_), _) => not_found(D::KIND).into(),
        (_, Some(key)) if is_unique_violation(&err) => duplicate(D::KIND, key).into(),
        _ => err.into(),
    }
}
