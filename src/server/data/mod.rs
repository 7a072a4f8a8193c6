//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! entity in the catalog. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! Replacement writes every column, matching the full-replace semantics of the API.

pub mod book;
pub mod company;
pub mod creator;
pub mod disc;
pub mod game;
pub mod series;
pub mod user;

#[cfg(test)]
mod test;
