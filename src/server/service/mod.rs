//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: uniqueness guards on natural keys, password hashing
//! - **Error Translation**: turning missing records and key collisions into domain errors
//! - **Domain Models**: working with domain models rather than DTOs or entity models
//!
//! The six catalog types share one generic `CatalogService`; each type plugs into it by
//! implementing `CatalogDocument` in its own module.

pub mod book;
pub mod catalog;
pub mod company;
pub mod creator;
pub mod disc;
pub mod game;
pub mod series;
pub mod token;
pub mod user;

#[cfg(test)]
mod test;
