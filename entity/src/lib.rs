//! SeaORM entity definitions for every table in the catalog database.

pub mod prelude;

pub mod book;
pub mod company;
pub mod creator;
pub mod disc;
pub mod game;
pub mod series;
pub mod user;
