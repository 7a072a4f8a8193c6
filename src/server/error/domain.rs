use thiserror::Error;

use crate::server::error::AppError;

/// Failures raised by the catalog and user services.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// No record with the requested id.
    #[error("{0}")]
    NotFound(String),

    /// Another record already uses the natural key (name, username or email).
    #[error("{0}")]
    Duplicate(String),
}

impl DomainError {
    /// Maps `NotFound` to a 404 response, leaving other domain errors on the default 500.
    ///
    /// Only the get-by-id endpoints use this; everywhere else a missing record answers 500.
    pub fn into_not_found(self) -> AppError {
        match self {
            DomainError::NotFound(msg) => AppError::NotFound(msg),
            err => AppError::DomainErr(err),
        }
    }
}

impl AppError {
    /// See `DomainError::into_not_found`.
    pub fn not_found_as_404(self) -> AppError {
        match self {
            AppError::DomainErr(err) => err.into_not_found(),
            err => err,
        }
    }
}
